//! Panel 1 — Overview: headline, before/after comparison, call to action.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use cloudpath_core::content::Card;
use cloudpath_core::{COMPARISON, PAGE};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(5),
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(PAGE.headline, theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(PAGE.subtitle, theme::text_secondary())),
    ];
    f.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_card(f, cards[0], &COMPARISON.before, theme::negative());
    render_card(f, cards[1], &COMPARISON.after, theme::positive());

    let actions: Vec<Span> = PAGE
        .cta_actions
        .iter()
        .flat_map(|a| [Span::styled(format!("[ {a} ]"), theme::accent()), Span::raw("  ")])
        .collect();
    let cta = vec![
        Line::from(Span::styled(PAGE.cta_title, theme::neutral())),
        Line::from(Span::styled(PAGE.cta_body, theme::muted())),
        Line::from(actions),
    ];
    f.render_widget(
        Paragraph::new(cta)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(theme::muted())),
        rows[2],
    );
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, style: ratatui::style::Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", card.title))
        .title_style(style);

    let lines: Vec<Line> = card
        .bullets
        .iter()
        .map(|b| Line::from(Span::styled(format!("• {b}"), style)))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

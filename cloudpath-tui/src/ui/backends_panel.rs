//! Panel 2 — Backends: one tab per backend option.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use cloudpath_core::{BACKENDS, PAGE};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled(PAGE.backends_title, theme::accent_bold())),
        Line::from(Span::styled(PAGE.backends_subtitle, theme::muted())),
    ];
    f.render_widget(Paragraph::new(heading), rows[0]);

    let titles: Vec<Line> = BACKENDS.iter().map(|b| Line::from(format!(" {} ", b.label))).collect();
    let tabs = Tabs::new(titles)
        .select(app.backend_tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, rows[1]);

    let option = app.backend_tab.option();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let mut left = vec![
        Line::from(Span::styled(option.heading, theme::text().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for feature in option.features {
        left.push(Line::from(vec![
            Span::styled("✔ ", theme::positive()),
            Span::styled(*feature, theme::text()),
        ]));
    }
    if let Some(prompt) = option.prompt {
        left.push(Line::from(Span::styled(prompt.title, theme::accent_bold())));
        left.push(Line::from(Span::styled(
            format!("\"{}\"", prompt.text),
            theme::accent().add_modifier(Modifier::ITALIC),
        )));
    }
    f.render_widget(
        Paragraph::new(left)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(theme::muted())),
        cols[0],
    );

    let right: Vec<Line> = option
        .highlights
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let bullet = if option.ordered {
                format!("{}. ", i + 1)
            } else {
                "• ".to_string()
            };
            Line::from(vec![Span::styled(bullet, theme::neutral()), Span::styled(*h, theme::text())])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", option.highlights_title))
        .title_style(theme::neutral());
    f.render_widget(Paragraph::new(right).wrap(Wrap { trim: true }).block(block), cols[1]);
}

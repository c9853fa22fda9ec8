//! Panel 3 — Steps: use-case tabs, step carousel, detail list, progress strip.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use cloudpath_core::{DisplayAttributes, Step, PAGE};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let (Some(use_case), Some(step)) = (app.current_use_case(), app.current_step()) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // section title
            Constraint::Length(1), // use-case tabs
            Constraint::Length(3), // carousel header
            Constraint::Min(4),    // list + card
            Constraint::Length(1), // progress strip
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled(PAGE.steps_title, theme::accent_bold())),
        Line::from(Span::styled(PAGE.steps_subtitle, theme::muted())),
    ];
    f.render_widget(Paragraph::new(heading), rows[0]);

    let titles: Vec<Line> = app
        .catalog()
        .use_cases()
        .iter()
        .enumerate()
        .map(|(i, u)| {
            let key = (b'a' + i as u8) as char;
            Line::from(format!(" {key} {} ", u.title))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.nav.current_use_case_index)
        .style(theme::muted())
        .highlight_style(theme::tag_bold(use_case.color_tag))
        .divider("|");
    f.render_widget(tabs, rows[1]);

    render_header(f, rows[2], app, step, use_case.title);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[3]);
    render_step_list(f, body[0], app);
    render_card(f, body[1], step);

    render_progress(f, rows[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState, step: &Step, use_case_title: &str) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(14),
        ])
        .split(area);

    let len = app.visible_steps().len();
    let index = app.nav.current_step_index;
    let button = |enabled: bool| if enabled { theme::accent() } else { theme::muted() };

    f.render_widget(
        Paragraph::new(Span::styled("◀ Previous [h]", button(index > 0))),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled("[l] Next ▶", button(index + 1 < len)))
            .alignment(Alignment::Right),
        cols[2],
    );

    let flat = app.navigator().flat_index(&app.nav);
    let center = vec![
        Line::from(vec![
            Span::styled(
                format!(" Step {} of {} ", index + 1, len),
                theme::tag_badge(step.color_tag),
            ),
            Span::styled(
                format!("  ·  {} of {} overall", flat + 1, app.catalog().total_steps()),
                theme::muted(),
            ),
        ]),
        Line::from(Span::styled(step.title, theme::text().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(use_case_title.to_string(), theme::text_secondary())),
    ];
    f.render_widget(Paragraph::new(center).alignment(Alignment::Center), cols[1]);
}

fn render_step_list(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Flow [Enter] details ")
        .title_style(theme::muted());

    let mut lines: Vec<Line> = Vec::new();
    for (i, step) in app.visible_steps().into_iter().enumerate() {
        let is_cursor = i == app.nav.current_step_index;
        let is_open = app.nav.is_detail_open(step.id);
        let style = if is_cursor {
            theme::tag_bold(step.color_tag)
        } else {
            theme::text()
        };
        let cursor = if is_cursor { "›" } else { " " };
        let fold = if is_open { "▼" } else { "▸" };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor} {}. ", i + 1), style),
            Span::styled(format!("{fold} {}", step.title), style),
        ]));

        if is_open {
            let attrs = DisplayAttributes::for_step(step);
            lines.push(Line::from(Span::styled(
                format!("     {}", attrs.badge_label),
                theme::location_badge(attrs.location_bucket),
            )));
            lines.push(Line::from(Span::styled(
                format!("     {}", step.description),
                theme::text_secondary(),
            )));
            lines.push(Line::from(Span::styled(
                format!("     \"{}\"", step.prompt),
                theme::accent().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn render_card(f: &mut Frame, area: Rect, step: &Step) {
    let attrs = DisplayAttributes::for_step(step);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::tag_border(attrs.color_tag));

    let lines = vec![
        Line::from(Span::styled(
            format!("  {}  ", attrs.icon.glyph()),
            theme::tag_tile(attrs.color_tag),
        )),
        Line::from(""),
        Line::from(Span::styled(step.title, theme::tag_text(attrs.color_tag))),
        Line::from(Span::styled(
            format!("[ {} ]", attrs.badge_label),
            theme::location_badge(attrs.location_bucket),
        )),
        Line::from(""),
        Line::from(Span::styled("What happens here:", theme::text().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(step.description, theme::text_secondary())),
        Line::from(""),
        Line::from(Span::styled("AI Prompt to use:", theme::accent_bold())),
        Line::from(Span::styled(
            format!("\"{}\"", step.prompt),
            theme::accent().add_modifier(Modifier::ITALIC),
        )),
    ];

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

/// One dot per step across every use case; the current one is filled.
fn render_progress(f: &mut Frame, area: Rect, app: &AppState) {
    let current = app.navigator().flat_index(&app.nav);
    let mut spans: Vec<Span> = Vec::new();
    let mut flat = 0;
    for use_case in app.catalog().use_cases() {
        for _ in &use_case.ordered_step_ids {
            let dot = if flat == current {
                Span::styled("● ", theme::tag_bold(use_case.color_tag))
            } else {
                Span::styled("○ ", theme::muted())
            };
            spans.push(dot);
            flat += 1;
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[p/n]", theme::muted()));

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(para, area);
}

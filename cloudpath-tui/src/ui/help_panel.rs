//! Panel 4 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::input::key_bindings_help;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (title, bindings) in key_bindings_help() {
        section(&mut lines, title);
        for (keys, desc) in bindings {
            key(&mut lines, keys, desc);
        }
        lines.push(Line::from(""));
    }

    section(&mut lines, "Location badges");
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Client ... ]", theme::location_badge(cloudpath_core::LocationBucket::ClientFrontend)),
        Span::styled("  runs on the public website", theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Server ... ]", theme::location_badge(cloudpath_core::LocationBucket::Server)),
        Span::styled("  runs on the backend provider", theme::muted()),
    ]));

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str) {
    lines.push(Line::from(Span::styled(title, theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &'a str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc, theme::muted()),
    ]));
}

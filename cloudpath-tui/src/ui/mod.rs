//! Top-level UI layout — panel tabs, active panel, status bar, overlays.

pub mod backends_panel;
pub mod help_panel;
pub mod overlays;
pub mod overview_panel;
pub mod status_bar;
pub mod steps_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: panel tabs + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_panel_tabs(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if app.overlay == Overlay::Welcome {
        overlays::render_welcome(f, chunks[1]);
    }
}

fn draw_panel_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .map(|p| Line::from(format!(" {} {} ", p.index() + 1, p.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_panel.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, area);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Overview => overview_panel::render(f, inner),
        Panel::Backends => backends_panel::render(f, inner, app),
        Panel::Steps => steps_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudpath_core::ColorTag;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn render(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn every_panel_renders() {
        let mut app = AppState::new(false);
        for panel in Panel::ALL {
            app.active_panel = panel;
            let screen = render(&app);
            assert!(screen.contains(panel.label()), "{}", panel.label());
        }
    }

    #[test]
    fn steps_panel_shows_carousel_position() {
        let mut app = AppState::new(false);
        app.active_panel = Panel::Steps;
        app.select_use_case(2);
        app.next_step();
        let screen = render(&app);
        assert!(screen.contains("Step 2 of 4"));
        assert!(screen.contains("Store in Database"));
        assert!(screen.contains("Server (Supabase Database)"));
    }

    #[test]
    fn step_count_badge_uses_tint() {
        let mut app = AppState::new(false);
        app.active_panel = Panel::Steps;
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let (r, g, b) = ColorTag::Purple.palette().light;
        let tinted = buffer
            .content()
            .iter()
            .any(|cell| cell.symbol() == "S" && cell.bg == Color::Rgb(r, g, b));
        assert!(tinted);
    }

    #[test]
    fn backend_prompt_heading_is_literal() {
        let mut app = AppState::new(false);
        app.active_panel = Panel::Backends;
        assert!(app.select_backend("auth0"));
        let screen = render(&app);
        assert!(screen.contains("AI Prompt for Auth0:"));
        assert!(!screen.contains("Auth0 Setup"));
    }

    #[test]
    fn expanded_detail_is_drawn() {
        let mut app = AppState::new(false);
        app.active_panel = Panel::Steps;
        app.select_use_case(1);
        app.next_step();
        app.toggle_current_detail();
        let screen = render(&app);
        assert!(screen.contains("▼ Send Contact Email"));
    }

    #[test]
    fn welcome_overlay_on_top() {
        let app = AppState::new(true);
        assert!(render(&app).contains("Welcome to Cloudpath"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = AppState::new(true);
        app.active_panel = Panel::Steps;
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}

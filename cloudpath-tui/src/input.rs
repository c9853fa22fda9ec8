//! Keyboard input dispatch — overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                app.active_panel = panel;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Welcome;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Overview | Panel::Help => {} // display only
        Panel::Backends => handle_backends_key(app, key),
        Panel::Steps => handle_steps_key(app, key),
    }
}

fn handle_backends_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => {
            app.backend_tab = app.backend_tab.next();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.backend_tab = app.backend_tab.prev();
        }
        _ => {}
    }
}

fn handle_steps_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.next_step(),
        KeyCode::Char('h') | KeyCode::Left => app.previous_step(),
        KeyCode::Char(']') => app.next_use_case(),
        KeyCode::Char('[') => app.previous_use_case(),
        KeyCode::Char(c @ 'a'..='c') => {
            app.select_use_case(c as usize - 'a' as usize);
            if let Some(use_case) = app.current_use_case() {
                app.set_status(use_case.title);
            }
        }
        KeyCode::Char('g') => app.jump_to_step(0),
        KeyCode::Char('G') => app.jump_to_last_step(),
        KeyCode::Char('n') => app.next_flat(),
        KeyCode::Char('p') => app.previous_flat(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_current_detail(),
        _ => {}
    }
}

/// Key bindings help text, grouped by panel.
pub fn key_bindings_help() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Global Navigation",
            vec![
                ("1-4", "Switch to panel by number"),
                ("Tab / Shift+Tab", "Cycle panels forward / back"),
                ("?", "Show the welcome card"),
                ("q / Ctrl+C", "Quit"),
            ],
        ),
        (
            "Panel 2 — Backends",
            vec![("h / l", "Previous / next backend tab")],
        ),
        (
            "Panel 3 — Steps",
            vec![
                ("h / l", "Previous / next step"),
                ("[ / ]", "Previous / next use case"),
                ("a / b / c", "Registration / contact / workflow"),
                ("g / G", "First / last step of the use case"),
                ("p / n", "Previous / next dot on the progress strip"),
                ("Enter / Space", "Expand or collapse the step detail"),
            ],
        ),
    ]
}

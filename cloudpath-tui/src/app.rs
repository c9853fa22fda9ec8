//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Navigation goes through the core `Navigator`;
//! the renderer only ever reads `AppState`.

use cloudpath_core::{BackendTab, Catalog, NavError, NavigationState, Navigator, Step, UseCase};
use tracing::warn;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Backends,
    Steps,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Overview, Panel::Backends, Panel::Steps, Panel::Help];

    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Backends => 1,
            Panel::Steps => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Backends => "Backends",
            Panel::Steps => "Steps",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub nav: NavigationState,
    pub backend_tab: BackendTab,

    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,

    navigator: Navigator<'static>,
}

impl AppState {
    pub fn new(show_welcome: bool) -> Self {
        Self {
            active_panel: Panel::Overview,
            running: true,
            nav: NavigationState::initial(),
            backend_tab: BackendTab::default(),
            status_message: None,
            overlay: if show_welcome {
                Overlay::Welcome
            } else {
                Overlay::None
            },
            navigator: Navigator::new(Catalog::global()),
        }
    }

    pub fn navigator(&self) -> Navigator<'static> {
        self.navigator
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.navigator.catalog()
    }

    pub fn current_use_case(&self) -> Option<&'static UseCase> {
        self.navigator.current_use_case(&self.nav)
    }

    pub fn current_step(&self) -> Option<&'static Step> {
        self.navigator.current_step(&self.nav)
    }

    pub fn visible_steps(&self) -> Vec<&'static Step> {
        self.navigator.visible_steps(&self.nav)
    }

    /// Open the backend tab with this id. Unknown ids leave the tab as is.
    pub fn select_backend(&mut self, id: &str) -> bool {
        match BackendTab::by_id(id) {
            Some(tab) => {
                self.backend_tab = tab;
                true
            }
            None => false,
        }
    }

    pub fn next_step(&mut self) {
        let next = self.navigator.go_to_next_step(&self.nav);
        self.set_nav(next);
    }

    pub fn previous_step(&mut self) {
        let next = self.navigator.go_to_previous_step(&self.nav);
        self.set_nav(next);
    }

    pub fn next_use_case(&mut self) {
        let next = self.navigator.go_to_next_use_case(&self.nav);
        self.set_nav(next);
    }

    pub fn previous_use_case(&mut self) {
        let next = self.navigator.go_to_previous_use_case(&self.nav);
        self.set_nav(next);
    }

    pub fn jump_to_step(&mut self, index: usize) {
        let result = self.navigator.jump_to_step(&self.nav, index);
        self.apply(result);
    }

    pub fn jump_to_last_step(&mut self) {
        let len = self.catalog().step_count(self.nav.current_use_case_index);
        self.jump_to_step(len.saturating_sub(1));
    }

    pub fn select_use_case(&mut self, index: usize) {
        let result = self.navigator.select_use_case(&self.nav, index);
        self.apply(result);
    }

    /// Expand or collapse the detail panel of the step under the cursor.
    pub fn toggle_current_detail(&mut self) {
        let Some(step) = self.current_step() else {
            return;
        };
        let result = self.navigator.toggle_step_detail(&self.nav, step.id);
        self.apply(result);
    }

    pub fn jump_to_flat(&mut self, flat: usize) {
        let result = self.navigator.jump_to_flat(&self.nav, flat);
        self.apply(result);
    }

    /// Move one dot along the progress strip, crossing use-case boundaries.
    pub fn next_flat(&mut self) {
        let flat = self.navigator.flat_index(&self.nav) + 1;
        if flat < self.catalog().total_steps() {
            self.jump_to_flat(flat);
        }
    }

    pub fn previous_flat(&mut self) {
        if let Some(flat) = self.navigator.flat_index(&self.nav).checked_sub(1) {
            self.jump_to_flat(flat);
        }
    }

    /// A move that changes the view clears any stale status message.
    fn set_nav(&mut self, next: NavigationState) {
        if next != self.nav {
            self.status_message = None;
            self.nav = next;
        }
    }

    fn apply(&mut self, result: Result<NavigationState, NavError>) {
        match result {
            Ok(next) => self.set_nav(next),
            Err(err) => {
                warn!(error = %err, "navigation rejected");
                self.set_warning(err.to_string());
            }
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

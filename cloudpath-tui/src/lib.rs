//! Cloudpath TUI — terminal walkthrough of moving an app to a cloud backend.
//!
//! Panels:
//! 1. Overview — headline, before/after comparison, call to action
//! 2. Backends — Supabase / Firebase / Auth0 / custom API tabs
//! 3. Steps — use-case tabs, step carousel, expandable detail, progress strip
//! 4. Help — keyboard shortcuts

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::TuiConfig;
pub use input::handle_key;

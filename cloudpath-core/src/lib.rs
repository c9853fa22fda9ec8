//! Cloudpath Core — catalog, navigation model and display rules for the
//! local-to-cloud walkthrough.
//!
//! This crate holds everything a renderer needs and nothing it draws:
//! - The canonical step / use-case catalog (static, read-only)
//! - Pure, bounds-safe navigation over `NavigationState`
//! - Icon, color and location-badge classification per step
//! - Static page copy (comparison cards, backend tabs)

pub mod catalog;
pub mod content;
pub mod display;
pub mod navigator;

pub use catalog::{
    Catalog, CatalogError, ColorTag, ExecutionSite, NotifyChannel, Step, StepCategory, UseCase,
};
pub use content::{BackendOption, BackendPrompt, BackendTab, BACKENDS, COMPARISON, PAGE};
pub use display::{lookup_step_display, DisplayAttributes, LocationBucket, Palette, StepIcon};
pub use navigator::{NavError, NavigationState, Navigator};

#[cfg(test)]
mod tests {
    use super::*;

    /// The catalog is shared read-only across threads; navigation state and
    /// errors must be movable between them.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Catalog>();
        require_sync::<Catalog>();
        require_send::<NavigationState>();
        require_sync::<NavigationState>();
        require_send::<NavError>();
        require_sync::<NavError>();
        require_send::<Navigator<'static>>();
        require_sync::<Navigator<'static>>();
    }
}

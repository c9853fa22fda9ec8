//! Navigation state machine over the catalog.
//!
//! States are `(use_case_index, step_index, selected_detail_step_id)`. All
//! transitions are pure: they take a state by reference and return the next
//! one. Step and use-case moves saturate at the bounds; direct jumps reject
//! out-of-range indices and leave the caller's state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{Catalog, Step, UseCase};

/// Errors from navigation requests. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("step index {index} out of range (use case has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    #[error("use case index {index} out of range ({len} use cases)")]
    UseCaseOutOfRange { index: usize, len: usize },

    #[error("unknown step: {0}")]
    UnknownStep(String),

    #[error("step {step_id} is not part of the visible use case {use_case_id}")]
    StepNotVisible { step_id: String, use_case_id: String },
}

/// What the viewer currently sees. Held per session, never persisted.
///
/// The fields are public so a state can be rebuilt from its three parts;
/// pass such a state through [`Navigator::restore`] before navigating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_use_case_index: usize,
    pub current_step_index: usize,
    pub selected_detail_step_id: Option<String>,
}

impl NavigationState {
    /// First use case, first step, nothing expanded.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn is_detail_open(&self, step_id: &str) -> bool {
        self.selected_detail_step_id.as_deref() == Some(step_id)
    }
}

/// Pure transitions bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    catalog: &'a Catalog,
}

impl Default for Navigator<'static> {
    fn default() -> Self {
        Self::new(Catalog::global())
    }
}

impl<'a> Navigator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn step_len(&self, state: &NavigationState) -> usize {
        self.catalog.step_count(state.current_use_case_index)
    }

    /// Check a state rebuilt from its raw fields against the catalog.
    ///
    /// The use case and step indices must be in range and an open detail
    /// must belong to the visible use case. A valid state comes back as is.
    pub fn restore(&self, state: NavigationState) -> Result<NavigationState, NavError> {
        let use_cases = self.catalog.use_cases().len();
        let use_case = self.catalog.use_case(state.current_use_case_index).ok_or(
            NavError::UseCaseOutOfRange {
                index: state.current_use_case_index,
                len: use_cases,
            },
        )?;
        let len = self.step_len(&state);
        if state.current_step_index >= len {
            return Err(NavError::StepOutOfRange {
                index: state.current_step_index,
                len,
            });
        }
        if let Some(id) = state.selected_detail_step_id.as_deref() {
            let step = self
                .catalog
                .step(id)
                .ok_or_else(|| NavError::UnknownStep(id.into()))?;
            if step.use_case_id != use_case.id {
                return Err(NavError::StepNotVisible {
                    step_id: id.into(),
                    use_case_id: use_case.id.into(),
                });
            }
        }
        debug!(
            use_case = state.current_use_case_index,
            step = state.current_step_index,
            "restored state"
        );
        Ok(state)
    }

    /// Advance one step within the current use case; no-op on the last step.
    pub fn go_to_next_step(&self, state: &NavigationState) -> NavigationState {
        let mut next = state.clone();
        if state.current_step_index < self.step_len(state).saturating_sub(1) {
            next.current_step_index += 1;
            debug!(step = next.current_step_index, "next step");
        }
        next
    }

    /// Go back one step; no-op on the first step.
    pub fn go_to_previous_step(&self, state: &NavigationState) -> NavigationState {
        let mut next = state.clone();
        if state.current_step_index > 0 {
            next.current_step_index -= 1;
            debug!(step = next.current_step_index, "previous step");
        }
        next
    }

    pub fn jump_to_step(
        &self,
        state: &NavigationState,
        index: usize,
    ) -> Result<NavigationState, NavError> {
        let len = self.step_len(state);
        if index >= len {
            return Err(NavError::StepOutOfRange { index, len });
        }
        let mut next = state.clone();
        next.current_step_index = index;
        debug!(step = index, "jump to step");
        Ok(next)
    }

    /// Switch use case. Always lands on step 0 with no detail selected.
    pub fn select_use_case(
        &self,
        state: &NavigationState,
        index: usize,
    ) -> Result<NavigationState, NavError> {
        let len = self.catalog.use_cases().len();
        if index >= len {
            return Err(NavError::UseCaseOutOfRange { index, len });
        }
        debug!(use_case = index, "select use case");
        Ok(NavigationState {
            current_use_case_index: index,
            current_step_index: 0,
            selected_detail_step_id: None,
        })
    }

    pub fn go_to_next_use_case(&self, state: &NavigationState) -> NavigationState {
        let target = state.current_use_case_index + 1;
        self.select_use_case(state, target)
            .unwrap_or_else(|_| state.clone())
    }

    pub fn go_to_previous_use_case(&self, state: &NavigationState) -> NavigationState {
        match state.current_use_case_index.checked_sub(1) {
            Some(target) => self
                .select_use_case(state, target)
                .unwrap_or_else(|_| state.clone()),
            None => state.clone(),
        }
    }

    /// Expand the detail panel of `step_id`, or collapse it if already open.
    /// Only steps of the visible use case can be expanded.
    pub fn toggle_step_detail(
        &self,
        state: &NavigationState,
        step_id: &str,
    ) -> Result<NavigationState, NavError> {
        let step = self
            .catalog
            .step(step_id)
            .ok_or_else(|| NavError::UnknownStep(step_id.into()))?;
        let use_case = self.current_use_case(state);
        if use_case.map(|u| u.id) != Some(step.use_case_id) {
            return Err(NavError::StepNotVisible {
                step_id: step_id.into(),
                use_case_id: use_case.map(|u| u.id).unwrap_or_default().into(),
            });
        }

        let mut next = state.clone();
        if state.is_detail_open(step_id) {
            next.selected_detail_step_id = None;
            debug!(step_id, "collapse detail");
        } else {
            next.selected_detail_step_id = Some(step_id.into());
            debug!(step_id, "expand detail");
        }
        Ok(next)
    }

    pub fn current_use_case(&self, state: &NavigationState) -> Option<&'a UseCase> {
        self.catalog.use_case(state.current_use_case_index)
    }

    pub fn current_step(&self, state: &NavigationState) -> Option<&'a Step> {
        self.visible_steps(state)
            .get(state.current_step_index)
            .copied()
    }

    /// Steps of the current use case in flow order.
    pub fn visible_steps(&self, state: &NavigationState) -> Vec<&'a Step> {
        self.catalog.steps_of(state.current_use_case_index)
    }

    /// Position of the current step across all use cases, in catalog order.
    /// Never past the last dot, even for a state that skipped [`Self::restore`].
    pub fn flat_index(&self, state: &NavigationState) -> usize {
        let use_cases = state.current_use_case_index.min(self.catalog.use_cases().len());
        let before: usize = (0..use_cases)
            .map(|i| self.catalog.step_count(i))
            .sum();
        before
            .saturating_add(state.current_step_index)
            .min(self.catalog.total_steps().saturating_sub(1))
    }

    /// Jump to a position on the flat progress strip. Moving into another
    /// use case clears the detail selection.
    pub fn jump_to_flat(
        &self,
        state: &NavigationState,
        flat: usize,
    ) -> Result<NavigationState, NavError> {
        let mut offset = flat;
        for (use_case_index, use_case) in self.catalog.use_cases().iter().enumerate() {
            let len = use_case.ordered_step_ids.len();
            if offset < len {
                let mut next = if use_case_index == state.current_use_case_index {
                    state.clone()
                } else {
                    self.select_use_case(state, use_case_index)?
                };
                next.current_step_index = offset;
                debug!(flat, use_case = use_case_index, step = offset, "jump to flat position");
                return Ok(next);
            }
            offset -= len;
        }
        Err(NavError::StepOutOfRange {
            index: flat,
            len: self.catalog.total_steps(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigator<'static> {
        Navigator::default()
    }

    fn state(use_case: usize, step: usize, detail: Option<&str>) -> NavigationState {
        NavigationState {
            current_use_case_index: use_case,
            current_step_index: step,
            selected_detail_step_id: detail.map(String::from),
        }
    }

    #[test]
    fn initial_state() {
        assert_eq!(NavigationState::initial(), state(0, 0, None));
    }

    #[test]
    fn next_saturates_at_last_step() {
        let nav = nav();
        let mut s = NavigationState::initial();
        for _ in 0..3 {
            s = nav.go_to_next_step(&s);
        }
        assert_eq!(s.current_step_index, 3);
        s = nav.go_to_next_step(&s);
        assert_eq!(s.current_step_index, 3);
    }

    #[test]
    fn previous_saturates_at_zero() {
        let nav = nav();
        let s = nav.go_to_previous_step(&NavigationState::initial());
        assert_eq!(s.current_step_index, 0);
        let s = nav.go_to_previous_step(&state(0, 2, None));
        assert_eq!(s.current_step_index, 1);
    }

    #[test]
    fn step_moves_keep_detail_selection() {
        let nav = nav();
        let s = nav.go_to_next_step(&state(0, 0, Some("reg-user")));
        assert_eq!(s, state(0, 1, Some("reg-user")));
    }

    #[test]
    fn jump_to_step_bounds() {
        let nav = nav();
        let s = state(1, 0, None);
        assert_eq!(nav.jump_to_step(&s, 1), Ok(state(1, 1, None)));
        assert_eq!(
            nav.jump_to_step(&s, 2),
            Err(NavError::StepOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn select_use_case_resets_step_and_detail() {
        let nav = nav();
        let s = nav.select_use_case(&state(0, 3, Some("reg-profile")), 2).unwrap();
        assert_eq!(s, state(2, 0, None));
        let ids: Vec<&str> = nav.visible_steps(&s).iter().map(|st| st.id).collect();
        assert_eq!(ids, ["workflow-form", "workflow-db", "workflow-slack", "workflow-email"]);
    }

    #[test]
    fn select_use_case_out_of_range() {
        assert_eq!(
            nav().select_use_case(&state(0, 1, None), 3),
            Err(NavError::UseCaseOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn use_case_carousel_saturates() {
        let nav = nav();
        let last = state(2, 1, Some("workflow-db"));
        assert_eq!(nav.go_to_next_use_case(&last), last);
        let first = state(0, 2, None);
        assert_eq!(nav.go_to_previous_use_case(&first), first);
        assert_eq!(nav.go_to_next_use_case(&first), state(1, 0, None));
        assert_eq!(nav.go_to_previous_use_case(&last), state(1, 0, None));
    }

    #[test]
    fn toggle_detail_expands_replaces_and_collapses() {
        let nav = nav();
        let s = nav.toggle_step_detail(&state(0, 0, None), "reg-email").unwrap();
        assert_eq!(s.selected_detail_step_id.as_deref(), Some("reg-email"));
        let s = nav.toggle_step_detail(&s, "reg-form").unwrap();
        assert_eq!(s.selected_detail_step_id.as_deref(), Some("reg-form"));
        let s = nav.toggle_step_detail(&s, "reg-form").unwrap();
        assert_eq!(s.selected_detail_step_id, None);
    }

    #[test]
    fn toggle_detail_rejects_other_use_case_and_unknown() {
        let nav = nav();
        let s = state(0, 0, None);
        assert!(matches!(
            nav.toggle_step_detail(&s, "contact-email"),
            Err(NavError::StepNotVisible { .. })
        ));
        assert_eq!(
            nav.toggle_step_detail(&s, "nope"),
            Err(NavError::UnknownStep("nope".into()))
        );
    }

    #[test]
    fn flat_index_counts_previous_use_cases() {
        let nav = nav();
        assert_eq!(nav.flat_index(&state(0, 0, None)), 0);
        assert_eq!(nav.flat_index(&state(1, 1, None)), 5);
        assert_eq!(nav.flat_index(&state(2, 3, None)), 9);
    }

    #[test]
    fn jump_to_flat_maps_to_owning_use_case() {
        let nav = nav();
        let s = state(0, 1, Some("reg-user"));
        assert_eq!(nav.jump_to_flat(&s, 3), Ok(state(0, 3, Some("reg-user"))));
        assert_eq!(nav.jump_to_flat(&s, 4), Ok(state(1, 0, None)));
        assert_eq!(nav.jump_to_flat(&s, 9), Ok(state(2, 3, None)));
        assert_eq!(
            nav.jump_to_flat(&s, 10),
            Err(NavError::StepOutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn restore_accepts_valid_state() {
        let s = state(1, 1, Some("contact-form"));
        assert_eq!(nav().restore(s.clone()), Ok(s));
        assert_eq!(nav().restore(NavigationState::initial()), Ok(state(0, 0, None)));
    }

    #[test]
    fn restore_rejects_out_of_range_and_foreign_detail() {
        let nav = nav();
        assert_eq!(
            nav.restore(state(3, 0, None)),
            Err(NavError::UseCaseOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            nav.restore(state(1, 7, None)),
            Err(NavError::StepOutOfRange { index: 7, len: 2 })
        );
        assert!(matches!(
            nav.restore(state(1, 0, Some("reg-form"))),
            Err(NavError::StepNotVisible { .. })
        ));
        assert_eq!(
            nav.restore(state(1, 0, Some("nope"))),
            Err(NavError::UnknownStep("nope".into()))
        );
    }

    #[test]
    fn unrestored_state_does_not_overflow() {
        let nav = nav();
        let s = state(1, usize::MAX, None);
        assert_eq!(nav.go_to_next_step(&s), s);
        assert_eq!(nav.flat_index(&s), 9);
        assert_eq!(nav.current_step(&s), None);
    }

    #[test]
    fn current_step_follows_cursor() {
        let nav = nav();
        let step = nav.current_step(&state(2, 2, None)).unwrap();
        assert_eq!(step.id, "workflow-slack");
    }
}

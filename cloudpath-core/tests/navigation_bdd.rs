//! BDD scenarios for the walkthrough navigator.
//!
//! These walk the built-in catalog the way a viewer would:
//! - Stepping through a use case until the carousel stops
//! - Switching use cases from the middle of a flow
//! - Expanding and collapsing a step's detail panel

use cloudpath_core::{lookup_step_display, Catalog, LocationBucket, NavError, NavigationState, Navigator};

#[test]
fn bdd_scenario_next_step_clamps_at_end_of_registration() {
    // GIVEN a fresh session on the registration flow (4 steps)
    let nav = Navigator::new(Catalog::global());
    let mut state = NavigationState::initial();
    assert_eq!(nav.current_use_case(&state).unwrap().id, "registration");

    // WHEN the viewer presses next three times
    for _ in 0..3 {
        state = nav.go_to_next_step(&state);
    }

    // THEN the carousel shows the last step
    assert_eq!(state.current_step_index, 3);
    assert_eq!(nav.current_step(&state).unwrap().id, "reg-profile");

    // AND pressing next again changes nothing
    let after = nav.go_to_next_step(&state);
    assert_eq!(after, state);
}

#[test]
fn bdd_scenario_switch_to_workflow_from_last_registration_step() {
    // GIVEN the viewer is on the last registration step
    let nav = Navigator::new(Catalog::global());
    let state = NavigationState {
        current_use_case_index: 0,
        current_step_index: 3,
        selected_detail_step_id: None,
    };

    // WHEN they pick the workflow use case
    let state = nav.select_use_case(&state, 2).expect("workflow is in range");

    // THEN the flow restarts at its first step with nothing expanded
    assert_eq!(
        state,
        NavigationState {
            current_use_case_index: 2,
            current_step_index: 0,
            selected_detail_step_id: None,
        }
    );

    // AND the visible steps are the workflow flow in order
    let ids: Vec<&str> = nav.visible_steps(&state).iter().map(|s| s.id).collect();
    assert_eq!(ids, ["workflow-form", "workflow-db", "workflow-slack", "workflow-email"]);
}

#[test]
fn bdd_scenario_toggle_contact_email_detail() {
    // GIVEN the contact use case is visible with no detail open
    let nav = Navigator::new(Catalog::global());
    let state = nav
        .select_use_case(&NavigationState::initial(), 1)
        .unwrap();
    assert!(state.selected_detail_step_id.is_none());

    // WHEN the viewer expands "contact-email"
    let expanded = nav.toggle_step_detail(&state, "contact-email").unwrap();

    // THEN it is the selected detail
    assert_eq!(expanded.selected_detail_step_id.as_deref(), Some("contact-email"));

    // AND toggling it again collapses it
    let collapsed = nav.toggle_step_detail(&expanded, "contact-email").unwrap();
    assert_eq!(collapsed.selected_detail_step_id, None);
}

#[test]
fn bdd_scenario_detail_of_hidden_use_case_is_rejected() {
    // GIVEN the registration use case is visible
    let nav = Navigator::new(Catalog::global());
    let state = NavigationState::initial();

    // WHEN the viewer asks for a workflow step's detail
    let result = nav.toggle_step_detail(&state, "workflow-slack");

    // THEN the request is rejected and their state is unchanged
    assert_eq!(
        result,
        Err(NavError::StepNotVisible {
            step_id: "workflow-slack".into(),
            use_case_id: "registration".into(),
        })
    );
    assert_eq!(state, NavigationState::initial());
}

#[test]
fn bdd_scenario_progress_strip_walks_every_step() {
    // GIVEN a fresh session
    let nav = Navigator::new(Catalog::global());
    let catalog = Catalog::global();
    let mut state = NavigationState::initial();
    let mut seen = Vec::new();

    // WHEN the viewer clicks each progress dot in turn
    for flat in 0..catalog.total_steps() {
        state = nav.jump_to_flat(&state, flat).unwrap();
        assert_eq!(nav.flat_index(&state), flat);
        seen.push(nav.current_step(&state).unwrap().id);
    }

    // THEN every step was shown once, in catalog order
    let expected: Vec<&str> = catalog
        .use_cases()
        .iter()
        .flat_map(|u| u.ordered_step_ids.iter().copied())
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn bdd_scenario_every_fixture_step_classifies() {
    // GIVEN the ten fixture step ids
    let ids = [
        "reg-form",
        "reg-user",
        "reg-email",
        "reg-profile",
        "contact-form",
        "contact-email",
        "workflow-form",
        "workflow-db",
        "workflow-slack",
        "workflow-email",
    ];

    // WHEN each is looked up
    // THEN each yields an icon and a location bucket
    for id in ids {
        let attrs = lookup_step_display(Catalog::global(), id).expect(id);
        let expected = if id.ends_with("-form") {
            LocationBucket::ClientFrontend
        } else {
            LocationBucket::Server
        };
        assert_eq!(attrs.location_bucket, expected, "{id}");
        assert!(!attrs.icon.label().is_empty());
    }
}

#[test]
fn bdd_scenario_saved_state_is_checked_before_use() {
    // GIVEN a saved state whose step index and open detail do not fit the contact flow
    let nav = Navigator::new(Catalog::global());
    let json = r#"{"current_use_case_index":1,"current_step_index":7,"selected_detail_step_id":"reg-form"}"#;
    let raw: NavigationState = serde_json::from_str(json).expect("three plain fields");

    // WHEN it is restored against the catalog
    let restored = nav.restore(raw);

    // THEN it is refused instead of being navigated from
    assert_eq!(restored, Err(NavError::StepOutOfRange { index: 7, len: 2 }));

    // AND a state that fits round-trips through JSON and restores unchanged
    let good = nav.toggle_step_detail(
        &nav.go_to_next_step(&nav.select_use_case(&NavigationState::initial(), 1).unwrap()),
        "contact-email",
    )
    .unwrap();
    let json = serde_json::to_string(&good).unwrap();
    let back: NavigationState = serde_json::from_str(&json).unwrap();
    assert_eq!(nav.restore(back), Ok(good));
}

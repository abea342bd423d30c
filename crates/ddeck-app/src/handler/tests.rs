//! Handler integration tests
//!
//! Exercise the update function across whole flows: submit lifecycle,
//! history refresh, selection, and render-completion delivery.

use std::sync::Arc;

use chrono::{Duration, Utc};
use ddeck_client::test_utils::{sample_design, ApiCall, ScriptedApi};
use ddeck_core::{ArchStyle, Design, DesignPayload, DiagramSpec, Error};
use tokio::sync::mpsc;

use crate::diagram::RenderAttempt;
use crate::handler::lifecycle::{PAYLOAD_POLL_DELAY_MS, PAYLOAD_POLL_MAX};
use crate::handler::{update, UpdateAction};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::process::process_message;
use crate::results::ResultTab;
use crate::state::{AppState, Lifecycle, View};

fn filled_state() -> AppState {
    let mut state = AppState::new();
    state.form.prompt = "Design a chat app".to_string();
    state.form.services = "auth, chat".to_string();
    state
}

fn design_with_diagrams(id: &str) -> Design {
    let mut design = sample_design(id);
    design.raw_output = Some(DesignPayload {
        diagrams: vec![
            DiagramSpec {
                kind: "mermaid".to_string(),
                content: "graph TD\nA --> B".to_string(),
            },
            DiagramSpec {
                kind: "plantuml".to_string(),
                content: "@startuml".to_string(),
            },
        ],
        architecture: Some("Two services behind a gateway".to_string()),
        ..Default::default()
    });
    design
}

#[test]
fn test_submit_transitions_to_submitting() {
    let mut state = filled_state();
    let result = update(&mut state, Message::SubmitForm);

    assert_eq!(state.lifecycle, Lifecycle::Submitting);
    match result.action {
        Some(UpdateAction::SubmitDesign { spec }) => {
            assert_eq!(spec.prompt, "Design a chat app");
            assert_eq!(spec.services, vec!["auth", "chat"]);
        }
        other => panic!("expected SubmitDesign action, got {other:?}"),
    }
}

#[test]
fn test_empty_prompt_is_rejected_before_any_request() {
    let mut state = AppState::new();
    state.form.prompt = "   ".to_string();
    let result = update(&mut state, Message::SubmitForm);

    assert!(result.action.is_none());
    assert_eq!(state.lifecycle, Lifecycle::Idle);
    assert_eq!(
        state.form.error.as_deref(),
        Some("Please describe your system requirements")
    );
}

#[test]
fn test_submit_while_in_flight_is_ignored() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    let second = update(&mut state, Message::SubmitForm);

    assert!(second.action.is_none());
    assert!(second.message.is_none());
    assert_eq!(state.lifecycle, Lifecycle::Submitting);
}

#[test]
fn test_submit_failure_keeps_form_and_message_verbatim() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::SubmitFailed {
            message: "Design generation service is unavailable".to_string(),
        },
    );

    assert_eq!(
        state.lifecycle,
        Lifecycle::Error("Design generation service is unavailable".to_string())
    );
    assert_eq!(state.form.prompt, "Design a chat app");
    assert_eq!(state.view, View::Create);
}

#[test]
fn test_submit_success_chains_fetch_and_history_refresh() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    let result = update(
        &mut state,
        Message::SubmitSucceeded {
            design: sample_design("d1"),
        },
    );

    // Still submitting: Viewing waits for the follow-up fetch.
    assert_eq!(state.lifecycle, Lifecycle::Submitting);
    assert_eq!(state.pending_fetch.as_deref(), Some("d1"));
    assert!(state.form.prompt.is_empty());
    assert!(matches!(result.message, Some(Message::RefreshHistory)));
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchDesign { ref id, delay_ms: 0 }) if id == "d1"
    ));
}

#[test]
fn test_fetch_matching_pending_enters_viewing_and_renders() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::SubmitSucceeded {
            design: sample_design("d1"),
        },
    );
    let result = update(
        &mut state,
        Message::DesignFetched {
            design: design_with_diagrams("d1"),
        },
    );

    assert_eq!(state.lifecycle, Lifecycle::Viewing);
    assert_eq!(state.view, View::Results);
    assert!(state.pending_fetch.is_none());
    // Only the recognized diagram is queued.
    match result.action {
        Some(UpdateAction::RenderDiagrams { jobs, .. }) => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].0, 0);
        }
        other => panic!("expected RenderDiagrams action, got {other:?}"),
    }
}

#[test]
fn test_empty_payload_schedules_bounded_repoll() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::SubmitSucceeded {
            design: sample_design("d1"),
        },
    );

    // First arrival without a payload: shown, but re-polled.
    let result = update(
        &mut state,
        Message::DesignFetched {
            design: sample_design("d1"),
        },
    );
    assert_eq!(state.lifecycle, Lifecycle::Viewing);
    assert_eq!(state.poll_attempts, 1);
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchDesign {
            delay_ms: PAYLOAD_POLL_DELAY_MS,
            ..
        })
    ));

    // Subsequent empty arrivals consume the remaining attempts.
    for expected in 2..=PAYLOAD_POLL_MAX {
        let result = update(
            &mut state,
            Message::DesignFetched {
                design: sample_design("d1"),
            },
        );
        assert_eq!(state.poll_attempts, expected);
        assert!(result.action.is_some());
    }

    // Budget spent: no further fetches.
    let done = update(
        &mut state,
        Message::DesignFetched {
            design: sample_design("d1"),
        },
    );
    assert!(done.action.is_none());
}

#[test]
fn test_repoll_delivering_payload_renders_without_changing_view() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::SubmitSucceeded {
            design: sample_design("d1"),
        },
    );
    update(
        &mut state,
        Message::DesignFetched {
            design: sample_design("d1"),
        },
    );

    // The user goes back to the form while the payload is generating.
    update(&mut state, Message::ReturnToCreate);
    assert_eq!(state.view, View::Create);

    let result = update(
        &mut state,
        Message::DesignFetched {
            design: design_with_diagrams("d1"),
        },
    );
    // Payload refreshed in place, view untouched.
    assert_eq!(state.view, View::Create);
    assert!(state.selected.as_ref().is_some_and(Design::has_payload));
    assert!(matches!(
        result.action,
        Some(UpdateAction::RenderDiagrams { .. })
    ));
}

#[test]
fn test_fetch_for_other_design_is_discarded() {
    let mut state = AppState::new();
    state.select_design(sample_design("d1"));

    let result = update(
        &mut state,
        Message::DesignFetched {
            design: design_with_diagrams("d9"),
        },
    );
    assert!(result.action.is_none());
    assert_eq!(state.selected.as_ref().unwrap().id, "d1");
}

#[test]
fn test_fetch_failure_for_pending_surfaces_error() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::SubmitSucceeded {
            design: sample_design("d1"),
        },
    );
    update(
        &mut state,
        Message::DesignFetchFailed {
            id: "d1".to_string(),
            message: "Design not found: d1".to_string(),
        },
    );

    assert_eq!(
        state.lifecycle,
        Lifecycle::Error("Design not found: d1".to_string())
    );
    assert!(state.pending_fetch.is_none());
}

#[test]
fn test_repoll_failure_is_not_fatal() {
    let mut state = AppState::new();
    state.select_design(sample_design("d1"));

    update(
        &mut state,
        Message::DesignFetchFailed {
            id: "d1".to_string(),
            message: "Unable to reach the design service".to_string(),
        },
    );
    assert_eq!(state.lifecycle, Lifecycle::Viewing);
}

#[test]
fn test_history_refresh_replaces_list_and_recomputes_stats() {
    let mut state = AppState::new();
    state.history = vec![sample_design("old")];

    let now = Utc::now();
    let mut recent = sample_design("d1");
    recent.created_at = now - Duration::days(2);
    let mut old = sample_design("d2");
    old.created_at = now - Duration::days(30);
    old.style = ArchStyle::Monolith;

    update(
        &mut state,
        Message::HistoryRefreshed {
            designs: vec![recent, old],
        },
    );

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.stats.total, 2);
    assert_eq!(state.stats.recent, 1);
    assert_eq!(state.stats.microservices, 1);
    assert_eq!(state.stats.monolith, 1);
    assert!(!state.history_loading);
}

#[test]
fn test_history_failure_does_not_disturb_submit_flow() {
    let mut state = filled_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::HistoryRefreshFailed {
            message: "Unable to reach the design service".to_string(),
        },
    );

    assert_eq!(state.lifecycle, Lifecycle::Submitting);
    assert_eq!(
        state.history_error.as_deref(),
        Some("Unable to reach the design service")
    );
}

#[test]
fn test_history_refresh_clamps_cursor() {
    let mut state = AppState::new();
    state.history = vec![sample_design("a"), sample_design("b"), sample_design("c")];
    state.history_cursor = 2;

    update(
        &mut state,
        Message::HistoryRefreshed {
            designs: vec![sample_design("a")],
        },
    );
    assert_eq!(state.history_cursor, 0);
}

#[test]
fn test_select_history_entry_is_served_from_cache() {
    let mut state = AppState::new();
    state.history = vec![sample_design("d1"), design_with_diagrams("d2")];
    state.history_cursor = 1;

    let result = update(&mut state, Message::SelectHistoryEntry);
    assert_eq!(state.selected.as_ref().unwrap().id, "d2");
    assert_eq!(state.view, View::Results);
    // Rendering is local work; no fetch is requested.
    assert!(matches!(
        result.action,
        Some(UpdateAction::RenderDiagrams { .. })
    ));
}

#[test]
fn test_selecting_new_design_invalidates_previous_renders() {
    let mut state = AppState::new();
    state.select_design(design_with_diagrams("d1"));
    let first_attempt = state.result_view.attempt;

    state.select_design(design_with_diagrams("d2"));
    update(
        &mut state,
        Message::DiagramRendered {
            attempt: first_attempt,
            index: 0,
            result: Ok(crate::diagram::DiagramVisual { lines: vec![] }),
        },
    );

    // The late completion from d1 must not land on d2's slot.
    assert!(matches!(
        state.result_view.diagrams[0].status,
        crate::results::DiagramStatus::Pending
    ));
}

#[test]
fn test_stale_attempt_id_never_matches_fresh_view() {
    let mut state = AppState::new();
    state.select_design(design_with_diagrams("d1"));
    let foreign = RenderAttempt::new();
    assert_ne!(foreign, state.result_view.attempt);
}

#[test]
fn test_keys_route_text_into_form_in_create_view() {
    let mut state = AppState::new();
    update(&mut state, Message::Key(InputKey::Char('h')));
    update(&mut state, Message::Key(InputKey::Char('i')));
    assert_eq!(state.form.prompt, "hi");

    // 'q' is text here, not a quit shortcut.
    update(&mut state, Message::Key(InputKey::Char('q')));
    assert!(!state.should_quit());
}

#[test]
fn test_keys_switch_tabs_in_results_view() {
    let mut state = AppState::new();
    state.select_design(design_with_diagrams("d1"));

    update(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.result_view.tab, ResultTab::Details);
    update(&mut state, Message::Key(InputKey::Char('3')));
    assert_eq!(state.result_view.tab, ResultTab::Raw);
    update(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.result_view.tab, ResultTab::Details);
}

#[test]
fn test_ctrl_c_quits_from_any_view() {
    let mut state = AppState::new();
    update(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[tokio::test]
async fn test_full_submit_flow_against_scripted_api() {
    let api = Arc::new(ScriptedApi::new());
    let stub = sample_design("d1");
    api.push_submit(Ok(stub));
    api.push_fetch(Ok(design_with_diagrams("d1")));
    api.push_list(Ok(vec![sample_design("d1")]));

    let (tx, mut rx) = mpsc::channel(32);
    let mut state = filled_state();

    process_message(&mut state, Message::SubmitForm, &api, &tx);
    while state.lifecycle != Lifecycle::Viewing {
        let msg = rx.recv().await.expect("event loop channel closed");
        process_message(&mut state, msg, &api, &tx);
    }

    assert_eq!(state.view, View::Results);
    assert_eq!(state.selected.as_ref().unwrap().id, "d1");

    let calls = api.calls();
    assert!(calls.contains(&ApiCall::Submit {
        prompt: "Design a chat app".to_string()
    }));
    assert!(calls.contains(&ApiCall::FetchOne {
        id: "d1".to_string()
    }));
    assert!(calls.contains(&ApiCall::List));
}

#[tokio::test]
async fn test_submit_failure_flow_against_scripted_api() {
    let api = Arc::new(ScriptedApi::new());
    api.push_submit(Err(Error::service("Design generation failed")));

    let (tx, mut rx) = mpsc::channel(32);
    let mut state = filled_state();

    process_message(&mut state, Message::SubmitForm, &api, &tx);
    let msg = rx.recv().await.expect("event loop channel closed");
    process_message(&mut state, msg, &api, &tx);

    assert_eq!(
        state.lifecycle,
        Lifecycle::Error("Design generation failed".to_string())
    );
    assert_eq!(state.form.prompt, "Design a chat app");
}

//! Submit/fetch lifecycle handlers
//!
//! Drives the request state machine: Idle -> Submitting -> Viewing on
//! the happy path, Idle -> Submitting -> Error(message) on failure.
//! The submit response may be a stub without the generated payload, so
//! success triggers a follow-up fetch keyed by `pending_fetch`; the
//! transition to Viewing happens only when that fetch resolves.

use ddeck_core::Design;
use tracing::{debug, warn};

use crate::message::Message;
use crate::results::ResultView;
use crate::state::{AppState, Lifecycle};

use super::{UpdateAction, UpdateResult};

/// Maximum delayed re-fetches for a design whose payload has not been
/// generated yet.
pub const PAYLOAD_POLL_MAX: u32 = 5;
/// Delay between payload re-fetches.
pub const PAYLOAD_POLL_DELAY_MS: u64 = 2_000;

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.is_submitting() {
        debug!("submit ignored: a request is already in flight");
        return UpdateResult::none();
    }

    let spec = state.form.to_spec();
    if let Err(err) = spec.validate() {
        // Local rejection: no request leaves the client and the
        // lifecycle stays where it was.
        state.form.error = Some(err.to_string());
        return UpdateResult::none();
    }

    state.form.error = None;
    state.lifecycle = Lifecycle::Submitting;
    UpdateResult::action(UpdateAction::SubmitDesign { spec })
}

pub fn handle_submit_succeeded(state: &mut AppState, design: Design) -> UpdateResult {
    if !state.is_submitting() {
        warn!(id = %design.id, "submit completion arrived outside a submit");
        return UpdateResult::none();
    }

    debug!(id = %design.id, "design created, fetching full record");
    state.form.reset_inputs();
    state.pending_fetch = Some(design.id.clone());
    // Remain Submitting until the follow-up fetch resolves; the history
    // refresh runs concurrently so the new entry shows up in the panel.
    UpdateResult::message_and_action(
        Message::RefreshHistory,
        UpdateAction::FetchDesign {
            id: design.id,
            delay_ms: 0,
        },
    )
}

pub fn handle_submit_failed(state: &mut AppState, message: String) -> UpdateResult {
    warn!(error = %message, "design submit failed");
    state.pending_fetch = None;
    // Form input is preserved for retry; the message is surfaced as
    // delivered, without rewording.
    state.lifecycle = Lifecycle::Error(message);
    UpdateResult::none()
}

pub fn handle_design_fetched(state: &mut AppState, design: Design) -> UpdateResult {
    if state.pending_fetch.as_deref() == Some(design.id.as_str()) {
        let attempts = state.poll_attempts;
        let id = design.id.clone();
        let has_payload = design.has_payload();
        let pending = state.select_design(design);

        if !has_payload {
            return schedule_payload_poll(state, id, attempts);
        }
        return render_action(state, pending);
    }

    // A payload re-poll for the design the user is already looking at.
    let is_selected = state
        .selected
        .as_ref()
        .is_some_and(|s| s.id == design.id);
    if is_selected {
        let attempts = state.poll_attempts;
        let id = design.id.clone();
        let has_payload = design.has_payload();

        // Refresh in place without touching the active view or
        // lifecycle: the user may have navigated back to the form.
        let (view, pending) = ResultView::for_design(&design);
        state.result_view = view;
        state.selected = Some(design);

        if !has_payload {
            return schedule_payload_poll(state, id, attempts);
        }
        return render_action(state, pending);
    }

    debug!(id = %design.id, "discarding stale design fetch");
    UpdateResult::none()
}

pub fn handle_design_fetch_failed(state: &mut AppState, id: &str, message: String) -> UpdateResult {
    if state.pending_fetch.as_deref() == Some(id) {
        warn!(id, error = %message, "follow-up fetch failed");
        state.pending_fetch = None;
        state.lifecycle = Lifecycle::Error(message);
        return UpdateResult::none();
    }

    // A failed re-poll is not fatal: the design is already displayed,
    // just without its payload.
    debug!(id, error = %message, "payload re-poll failed, giving up");
    UpdateResult::none()
}

fn schedule_payload_poll(state: &mut AppState, id: String, attempts: u32) -> UpdateResult {
    if attempts >= PAYLOAD_POLL_MAX {
        debug!(id, "payload still empty after {PAYLOAD_POLL_MAX} polls, giving up");
        return UpdateResult::none();
    }
    state.poll_attempts = attempts + 1;
    debug!(id, attempt = attempts + 1, "payload not generated yet, re-polling");
    UpdateResult::action(UpdateAction::FetchDesign {
        id,
        delay_ms: PAYLOAD_POLL_DELAY_MS,
    })
}

fn render_action(state: &AppState, pending: Vec<(usize, String)>) -> UpdateResult {
    if pending.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::RenderDiagrams {
        attempt: state.result_view.attempt,
        jobs: pending,
    })
}

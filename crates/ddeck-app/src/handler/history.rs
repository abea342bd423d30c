//! History refresh and statistics handlers
//!
//! The history is replaced wholesale on every successful refresh, and
//! the dashboard statistics are recomputed from the new list in the
//! same step. A failed refresh lands in its own error slot so it never
//! interferes with an in-flight submit.

use chrono::Utc;
use ddeck_core::{Design, DesignStats};
use tracing::{debug, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    state.history_loading = true;
    state.history_error = None;
    UpdateResult::action(UpdateAction::RefreshHistory)
}

pub fn handle_refreshed(state: &mut AppState, designs: Vec<Design>) -> UpdateResult {
    debug!(count = designs.len(), "history refreshed");
    state.history = designs;
    state.stats = DesignStats::compute(&state.history, Utc::now());
    state.history_loading = false;
    state.history_error = None;
    // The cursor may point past the end of a shorter list.
    state.move_history_cursor(0);
    UpdateResult::none()
}

pub fn handle_refresh_failed(state: &mut AppState, message: String) -> UpdateResult {
    warn!(error = %message, "history refresh failed");
    state.history_loading = false;
    state.history_error = Some(message);
    UpdateResult::none()
}

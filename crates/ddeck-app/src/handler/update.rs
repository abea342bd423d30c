//! Main update function - dispatches messages to handlers

use crate::message::Message;
use crate::state::AppState;

use super::{history, keys, lifecycle, results, UpdateResult};

/// Process a message and update state (TEA update function).
///
/// Pure with respect to I/O: side effects are requested through the
/// returned [`UpdateAction`](super::UpdateAction) and executed by the
/// event loop.
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    match msg {
        Message::Key(key) => keys::handle_key(state, key),
        Message::Tick => UpdateResult::none(),
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // Lifecycle
        Message::SubmitForm => lifecycle::handle_submit(state),
        Message::SubmitSucceeded { design } => lifecycle::handle_submit_succeeded(state, design),
        Message::SubmitFailed { message } => lifecycle::handle_submit_failed(state, message),
        Message::DesignFetched { design } => lifecycle::handle_design_fetched(state, design),
        Message::DesignFetchFailed { id, message } => {
            lifecycle::handle_design_fetch_failed(state, &id, message)
        }

        // History
        Message::RefreshHistory => history::handle_refresh(state),
        Message::HistoryRefreshed { designs } => history::handle_refreshed(state, designs),
        Message::HistoryRefreshFailed { message } => history::handle_refresh_failed(state, message),

        // Navigation
        Message::HistoryCursor(delta) => {
            state.move_history_cursor(delta);
            UpdateResult::none()
        }
        Message::SelectHistoryEntry => results::handle_select_history_entry(state),
        Message::ReturnToCreate => {
            state.return_to_create();
            UpdateResult::none()
        }
        Message::ReenterResults => {
            state.reenter_results();
            UpdateResult::none()
        }

        // Result view
        Message::NextTab => results::handle_next_tab(state),
        Message::PrevTab => results::handle_prev_tab(state),
        Message::SetTab(tab) => results::handle_set_tab(state, tab),
        Message::ToggleSection(section) => results::handle_toggle_section(state, section),
        Message::ScrollResults(delta) => results::handle_scroll(state, delta),
        Message::DiagramRendered {
            attempt,
            index,
            result,
        } => results::handle_diagram_rendered(state, attempt, index, result),
    }
}

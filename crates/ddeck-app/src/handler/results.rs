//! Result view handlers
//!
//! Tab switching, section toggling, scrolling, and diagram render
//! completions. Selecting a history entry is served entirely from the
//! local cache; only the diagram renders go back to a background task.

use tracing::debug;

use crate::diagram::{DiagramVisual, RenderAttempt, RenderError};
use crate::results::{ResultTab, Section};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_select_history_entry(state: &mut AppState) -> UpdateResult {
    let Some(design) = state.history_selection().cloned() else {
        return UpdateResult::none();
    };
    debug!(id = %design.id, "opening design from history");
    let pending = state.select_design(design);
    if pending.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::RenderDiagrams {
        attempt: state.result_view.attempt,
        jobs: pending,
    })
}

pub fn handle_next_tab(state: &mut AppState) -> UpdateResult {
    if state.selected.is_some() {
        state.result_view.tab = state.result_view.tab.next();
        state.result_view.scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_prev_tab(state: &mut AppState) -> UpdateResult {
    if state.selected.is_some() {
        state.result_view.tab = state.result_view.tab.prev();
        state.result_view.scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_set_tab(state: &mut AppState, tab: ResultTab) -> UpdateResult {
    if state.selected.is_some() && state.result_view.tab != tab {
        state.result_view.tab = tab;
        state.result_view.scroll = 0;
    }
    UpdateResult::none()
}

pub fn handle_toggle_section(state: &mut AppState, section: Section) -> UpdateResult {
    if state.selected.is_some() {
        state.result_view.sections.toggle(section);
    }
    UpdateResult::none()
}

pub fn handle_scroll(state: &mut AppState, delta: i16) -> UpdateResult {
    let current = state.result_view.scroll;
    state.result_view.scroll = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as u16)
    };
    UpdateResult::none()
}

pub fn handle_diagram_rendered(
    state: &mut AppState,
    attempt: RenderAttempt,
    index: usize,
    result: Result<DiagramVisual, RenderError>,
) -> UpdateResult {
    if !state.result_view.apply_render(attempt, index, result) {
        debug!(index, "discarding render for superseded selection");
    }
    UpdateResult::none()
}

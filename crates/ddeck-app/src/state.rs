//! Application state (Model in TEA pattern)
//!
//! `AppState` is the single source of truth for which design is
//! displayed and which top-level view is active. It is owned by the
//! event loop and mutated only through the handlers; the presentation
//! layer re-queries it every frame instead of receiving pushed diffs.

use ddeck_core::{Design, DesignStats};

use crate::form::DesignForm;
use crate::results::ResultView;

/// Which top-level view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The design creation form.
    #[default]
    Create,
    /// The results panel for the selected design.
    Results,
}

/// The design-request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    /// A submit is in flight; further submits are rejected.
    Submitting,
    /// The last submit failed; the message is surfaced verbatim.
    Error(String),
    /// A design is selected and displayed.
    Viewing,
}

/// Complete application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub view: View,
    pub lifecycle: Lifecycle,
    pub form: DesignForm,
    /// Whether the gateway carries a session credential; display only.
    pub authenticated: bool,

    // History (owned by the aggregator handlers; replaced wholesale,
    // never merged).
    pub history: Vec<Design>,
    pub stats: DesignStats,
    pub history_loading: bool,
    /// Aggregator error channel, independent of the lifecycle error
    /// state: a failed refresh must not block a successful submit flow.
    pub history_error: Option<String>,
    /// Cursor into the history panel list.
    pub history_cursor: usize,

    // Selection
    pub selected: Option<Design>,
    pub result_view: ResultView,
    /// Design id awaited by the post-create follow-up fetch. A fetch
    /// completion for any other id is stale and discarded.
    pub pending_fetch: Option<String>,
    /// Payload re-poll attempts consumed for the selected design.
    pub poll_attempts: u32,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_submitting(&self) -> bool {
        self.lifecycle == Lifecycle::Submitting
    }

    /// Make `design` the displayed design.
    ///
    /// Resets all transient selection state (active tab, section
    /// flags, render slots) regardless of what the previous design had,
    /// and returns the recognized diagram sources that need rendering.
    pub fn select_design(&mut self, design: Design) -> Vec<(usize, String)> {
        let (view, pending) = ResultView::for_design(&design);
        self.result_view = view;
        self.selected = Some(design);
        self.view = View::Results;
        self.lifecycle = Lifecycle::Viewing;
        self.pending_fetch = None;
        self.poll_attempts = 0;
        pending
    }

    /// Flip back to the creation form. The previously viewed design is
    /// retained so re-entering results needs no re-fetch.
    pub fn return_to_create(&mut self) {
        self.view = View::Create;
        if self.lifecycle == Lifecycle::Viewing {
            self.lifecycle = Lifecycle::Idle;
        }
    }

    /// Re-enter the results view for the retained design, if any.
    pub fn reenter_results(&mut self) -> bool {
        if self.selected.is_some() {
            self.view = View::Results;
            self.lifecycle = Lifecycle::Viewing;
            true
        } else {
            false
        }
    }

    /// Move the history cursor, clamped to the list bounds.
    pub fn move_history_cursor(&mut self, delta: isize) {
        if self.history.is_empty() {
            self.history_cursor = 0;
            return;
        }
        let len = self.history.len() as isize;
        let next = (self.history_cursor as isize + delta).clamp(0, len - 1);
        self.history_cursor = next as usize;
    }

    /// The history entry under the cursor.
    pub fn history_selection(&self) -> Option<&Design> {
        self.history.get(self.history_cursor)
    }
}

//! Message types for the application (TEA pattern)

use ddeck_core::Design;

use crate::diagram::{DiagramVisual, RenderAttempt, RenderError};
use crate::input_key::InputKey;
use crate::results::{ResultTab, Section};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Lifecycle Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the current form contents
    SubmitForm,
    /// The create call succeeded (the design may be a stub without a
    /// payload; a follow-up fetch is issued)
    SubmitSucceeded { design: Design },
    /// The create call failed
    SubmitFailed { message: String },
    /// A single-design fetch resolved
    DesignFetched { design: Design },
    /// A single-design fetch failed
    DesignFetchFailed { id: String, message: String },

    // ─────────────────────────────────────────────────────────
    // History Messages
    // ─────────────────────────────────────────────────────────
    /// Trigger a full history refresh
    RefreshHistory,
    /// The listing call resolved; replaces the whole history
    HistoryRefreshed { designs: Vec<Design> },
    /// The listing call failed (independent error channel)
    HistoryRefreshFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Navigation / Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Move the history panel cursor
    HistoryCursor(isize),
    /// Open the history entry under the cursor (no network round-trip)
    SelectHistoryEntry,
    /// Flip back to the creation form
    ReturnToCreate,
    /// Re-enter the results view for the retained design
    ReenterResults,

    // ─────────────────────────────────────────────────────────
    // Result View Messages
    // ─────────────────────────────────────────────────────────
    NextTab,
    PrevTab,
    SetTab(ResultTab),
    ToggleSection(Section),
    /// Scroll the active result panel by the given number of rows
    ScrollResults(i16),

    /// A diagram render completed (success or failure); stale attempt
    /// ids are discarded on arrival
    DiagramRendered {
        attempt: RenderAttempt,
        index: usize,
        result: Result<DiagramVisual, RenderError>,
    },
}

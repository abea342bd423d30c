//! Handler module - TEA update function and message handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `lifecycle`: Submit/fetch lifecycle handlers
//! - `history`: History refresh and statistics handlers
//! - `results`: Result view and render-completion handlers
//! - `keys`: Key event handlers per view

pub(crate) mod history;
pub(crate) mod keys;
pub(crate) mod lifecycle;
pub(crate) mod results;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use ddeck_core::DesignSpec;

use crate::diagram::RenderAttempt;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST the spec to the generation service
    SubmitDesign { spec: DesignSpec },

    /// Re-fetch the full history listing
    RefreshHistory,

    /// Fetch a single design by id, after an optional delay.
    ///
    /// The delay is used by the payload re-poll: a freshly created
    /// design may come back without its generated payload, and the
    /// handler schedules a bounded number of delayed re-fetches.
    FetchDesign { id: String, delay_ms: u64 },

    /// Render the given diagram sources off the event loop.
    ///
    /// Each `(slot index, source)` pair gets an independent task so one
    /// unparseable diagram cannot block its siblings. Completions carry
    /// the attempt id and are discarded when the selection has moved on.
    RenderDiagrams {
        attempt: RenderAttempt,
        jobs: Vec<(usize, String)>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn message_and_action(msg: Message, action: UpdateAction) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}

//! DesignDeck application logic (TEA pattern)
//!
//! The update cycle: the terminal layer feeds [`Message`]s into
//! [`process_message`], which runs the pure [`handler::update`]
//! function against [`AppState`] and dispatches any requested
//! [`handler::UpdateAction`] to a background task. Tasks report back
//! over the same message channel.

pub mod actions;
pub mod diagram;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod results;
pub mod state;

pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, Lifecycle, View};

//! Message processing - drives the update/action cycle
//!
//! A single incoming message may produce a chain of follow-up messages
//! (for example a successful submit triggers a history refresh); the
//! loop drains the chain synchronously while dispatching each requested
//! action to a background task.

use std::sync::Arc;

use ddeck_client::DesignApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    api: &Arc<A>,
    msg_tx: &mpsc::Sender<Message>,
) where
    A: DesignApi + Send + Sync + 'static,
{
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = handler::update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, Arc::clone(api), msg_tx.clone());
        }
        next = result.message;
    }
}

//! Action execution - side effects requested by the update function
//!
//! Every action spawns a detached task that reports back over the
//! message channel, so the event loop never blocks on the network or
//! on a diagram layout.

use std::sync::Arc;
use std::time::Duration;

use ddeck_client::DesignApi;
use tokio::sync::mpsc;
use tracing::error;

use crate::diagram;
use crate::handler::UpdateAction;
use crate::message::Message;

pub fn handle_action<A>(action: UpdateAction, api: Arc<A>, msg_tx: mpsc::Sender<Message>)
where
    A: DesignApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitDesign { spec } => {
            tokio::spawn(async move {
                let msg = match api.submit(&spec).await {
                    Ok(design) => Message::SubmitSucceeded { design },
                    Err(err) => Message::SubmitFailed {
                        message: err.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RefreshHistory => {
            tokio::spawn(async move {
                let msg = match api.list().await {
                    Ok(designs) => Message::HistoryRefreshed { designs },
                    Err(err) => Message::HistoryRefreshFailed {
                        message: err.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchDesign { id, delay_ms } => {
            tokio::spawn(async move {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                let msg = match api.fetch_one(&id).await {
                    Ok(design) => Message::DesignFetched { design },
                    Err(err) => Message::DesignFetchFailed {
                        id,
                        message: err.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::RenderDiagrams { attempt, jobs } => {
            // One task per diagram: a slow or failing render must not
            // hold up its siblings.
            for (index, source) in jobs {
                let msg_tx = msg_tx.clone();
                tokio::spawn(async move {
                    let result = diagram::render(&source).await;
                    send(
                        &msg_tx,
                        Message::DiagramRendered {
                            attempt,
                            index,
                            result,
                        },
                    )
                    .await;
                });
            }
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(err) = msg_tx.send(msg).await {
        error!("failed to send message to event loop: {err}");
    }
}

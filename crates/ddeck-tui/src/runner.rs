//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use ddeck_app::message::Message;
use ddeck_app::{process_message, AppState};
use ddeck_client::DesignApi;
use ddeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application against the given gateway
pub async fn run<A>(api: A, authenticated: bool) -> Result<()>
where
    A: DesignApi + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let api = Arc::new(api);
    let mut state = AppState::new();
    state.authenticated = authenticated;

    // Unified message channel: background tasks and the signal handler
    // all report back here.
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    // Populate the dashboard before the first keypress.
    process_message(&mut state, Message::RefreshHistory, &api, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();
    result
}

/// Sends Quit on Ctrl+C delivered as a signal rather than a key event.
fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = msg_tx.send(Message::Quit).await;
        }
    });
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &Arc<A>,
) -> Result<()>
where
    A: DesignApi + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Drain completions from background tasks (non-blocking).
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, api, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, api, &msg_tx);
        }
    }

    Ok(())
}

//! ddeck-tui - Terminal UI for DesignDeck
//!
//! This crate provides the ratatui-based terminal interface. It owns
//! the event loop: terminal events become messages for ddeck-app, and
//! the resulting state is rendered every frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

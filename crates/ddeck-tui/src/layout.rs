//! Screen layout definitions for the TUI
//!
//! One fixed frame for both views: header on top, dashboard stat cards
//! under it, then a history panel on the left and the active content
//! (form or results) on the right.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum width before the history panel is dropped entirely.
const HISTORY_MIN_TOTAL_WIDTH: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title + keybindings)
    pub header: Rect,

    /// Dashboard statistics cards
    pub stats: Rect,

    /// Rolling history panel; zero-width on narrow terminals
    pub history: Rect,

    /// Main content area (creation form or result panel)
    pub content: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(4), // Stat cards
        Constraint::Min(8),    // History + content
    ])
    .split(area);

    let (history, content) = if area.width < HISTORY_MIN_TOTAL_WIDTH {
        (Rect::new(rows[2].x, rows[2].y, 0, 0), rows[2])
    } else {
        let cols =
            Layout::horizontal([Constraint::Length(34), Constraint::Min(30)]).split(rows[2]);
        (cols[0], cols[1])
    };

    ScreenAreas {
        header: rows[0],
        stats: rows[1],
        history,
        content,
    }
}

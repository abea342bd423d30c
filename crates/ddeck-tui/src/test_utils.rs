//! Shared helpers for widget and render tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// A fixed-size terminal backed by a buffer, for asserting on rendered
/// text.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    width: u16,
    height: u16,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(100, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend never fails to initialize");
        Self {
            terminal,
            width,
            height,
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw to test backend");
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame)) {
        self.terminal.draw(f).expect("draw to test backend");
    }

    /// The whole buffer as text, one row per line.
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}

//! Raw payload panel
//!
//! The guaranteed fallback view: the payload exactly as the service
//! sent it, pretty-printed with stable key order.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct RawView<'a> {
    text: &'a str,
    scroll: u16,
}

impl<'a> RawView<'a> {
    pub fn new(text: &'a str, scroll: u16) -> Self {
        Self { text, scroll }
    }
}

impl Widget for RawView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .text
            .lines()
            .map(|row| Line::styled(format!(" {row}"), styles::text_secondary()))
            .collect();
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_raw_view_shows_serialized_payload() {
        let text = "{\n  \"architecture\": \"Layers\"\n}";
        let mut term = TestTerminal::new();
        term.render_widget(RawView::new(text, 0), Rect::new(0, 0, 60, 10));
        assert!(term.buffer_contains("\"architecture\": \"Layers\""));
    }

    #[test]
    fn test_raw_view_null_payload() {
        let mut term = TestTerminal::new();
        term.render_widget(RawView::new("null", 0), Rect::new(0, 0, 60, 10));
        assert!(term.buffer_contains("null"));
    }
}

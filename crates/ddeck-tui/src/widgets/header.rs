//! Header bar widget
//!
//! App title on the left, per-view keybinding hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use ddeck_app::View;

use crate::theme::{palette, styles};

/// Main header showing app title and keybindings for the active view
pub struct MainHeader {
    view: View,
    authenticated: bool,
}

impl MainHeader {
    pub fn new(view: View) -> Self {
        Self {
            view,
            authenticated: false,
        }
    }

    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled(
                "DesignDeck",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled(
                match self.view {
                    View::Create => "New Design",
                    View::Results => "Results",
                },
                styles::text_secondary(),
            ),
        ];
        if self.authenticated {
            left.push(Span::raw("  "));
            left.push(Span::styled("● signed in", styles::status_green()));
        }
        let left_line = Line::from(left);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let hints: &[(&str, &str)] = match self.view {
            View::Create => &[
                ("Tab", "Field"),
                ("Enter", "Generate"),
                ("^R", "Refresh"),
                ("Esc", "Quit"),
            ],
            View::Results => &[
                ("Tab", "Mode"),
                ("1-3", "Jump"),
                ("b", "Back"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        let hint_line = Line::from(spans);
        let hint_width = hint_line.width() as u16;

        if left_width + hint_width + 2 <= inner.width {
            let x = inner.x + inner.width - hint_width;
            buf.set_line(x, inner.y, &hint_line, hint_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_view_name() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(View::Create), term.area());
        assert!(term.buffer_contains("DesignDeck"));
        assert!(term.buffer_contains("New Design"));
    }

    #[test]
    fn test_header_hints_follow_view() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(View::Results), term.area());
        assert!(term.buffer_contains("[b] Back"));
        assert!(!term.buffer_contains("Generate"));
    }

    #[test]
    fn test_header_narrow_terminal_drops_hints() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(MainHeader::new(View::Create), term.area());
        assert!(term.buffer_contains("DesignDeck"));
        assert!(!term.buffer_contains("Generate"));
    }

    #[test]
    fn test_header_shows_session_marker() {
        let mut term = TestTerminal::new();
        term.render_widget(
            MainHeader::new(View::Create).authenticated(true),
            term.area(),
        );
        assert!(term.buffer_contains("signed in"));
    }
}

//! History panel widget
//!
//! Rolling list of past designs with the navigation cursor. Entries
//! show a trimmed prompt, the style label and the creation date.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use ddeck_core::Design;

use crate::theme::{palette, styles};

pub struct HistoryList<'a> {
    designs: &'a [Design],
    cursor: usize,
    loading: bool,
    error: Option<&'a str>,
    /// Id of the design currently open in the results view, marked in
    /// the list independently of the cursor.
    viewing_id: Option<&'a str>,
}

impl<'a> HistoryList<'a> {
    pub fn new(designs: &'a [Design], cursor: usize) -> Self {
        Self {
            designs,
            cursor,
            loading: false,
            error: None,
            viewing_id: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn viewing(mut self, id: Option<&'a str>) -> Self {
        self.viewing_id = id;
        self
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = if self.loading {
            " History (refreshing…) "
        } else {
            " History "
        };
        let block = styles::glass_block(false).title(Span::styled(title, styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut y = inner.y;
        if let Some(error) = self.error {
            let line = Line::styled(truncate(error, inner.width as usize), styles::status_red());
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        if self.designs.is_empty() {
            if y < inner.y + inner.height {
                let line = Line::styled("No designs yet", styles::text_muted());
                buf.set_line(inner.x, y, &line, inner.width);
            }
            return;
        }

        // Two rows per entry; keep the cursor on screen.
        let rows_left = (inner.y + inner.height - y) as usize;
        let visible = (rows_left / 2).max(1);
        let first = self.cursor.saturating_sub(visible.saturating_sub(1));

        for (offset, design) in self.designs.iter().enumerate().skip(first).take(visible) {
            let is_cursor = offset == self.cursor;
            let marker = if self.viewing_id == Some(design.id.as_str()) {
                "▸"
            } else {
                " "
            };

            let prompt_style = if is_cursor {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            let prompt = truncate(
                &design.prompt_preview(inner.width as usize),
                inner.width.saturating_sub(2) as usize,
            );
            let line = Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::raw(" "),
                Span::styled(prompt, prompt_style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
            if y >= inner.y + inner.height {
                break;
            }

            let meta = format!(
                "  {} · {} · {}",
                design.style.label(),
                design.complexity.label(),
                design.created_at.format("%b %d")
            );
            let line = Line::styled(
                truncate(&meta, inner.width as usize),
                Style::default().fg(palette::TEXT_MUTED),
            );
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
            if y >= inner.y + inner.height {
                break;
            }
        }
    }
}

/// Trim to a display width, not a char count.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

//! Diagram panel widget
//!
//! Renders each diagram slot according to its independent state:
//! finished box art, an in-flight notice, a failure with the source
//! shown verbatim, or an unsupported-kind placeholder pointing at the
//! raw tab.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ddeck_app::results::{DiagramSlot, DiagramStatus};

use crate::theme::{palette, styles};

pub struct DiagramView<'a> {
    slots: &'a [DiagramSlot],
    scroll: u16,
}

impl<'a> DiagramView<'a> {
    pub fn new(slots: &'a [DiagramSlot], scroll: u16) -> Self {
        Self { slots, scroll }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if self.slots.is_empty() {
            return vec![
                Line::raw(""),
                Line::styled("  No diagram in this design", styles::text_muted()),
                Line::styled(
                    "  The generated payload did not include one",
                    styles::text_muted(),
                ),
            ];
        }

        let mut lines = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if self.slots.len() > 1 {
                lines.push(Line::styled(
                    format!("  Diagram {} of {}", index + 1, self.slots.len()),
                    styles::text_secondary(),
                ));
            }
            match &slot.status {
                DiagramStatus::Rendered(visual) => {
                    for row in &visual.lines {
                        lines.push(Line::styled(
                            format!("  {row}"),
                            Style::default().fg(palette::DIAGRAM_BOX),
                        ));
                    }
                }
                DiagramStatus::Pending => {
                    lines.push(Line::styled("  Rendering…", styles::status_yellow()));
                }
                DiagramStatus::Failed(err) => {
                    lines.push(Line::styled(
                        format!("  Could not render this diagram: {}", err.message),
                        styles::status_red(),
                    ));
                    lines.push(Line::styled("  Source:", styles::text_muted()));
                    for row in err.source.lines() {
                        lines.push(Line::styled(
                            format!("    {row}"),
                            Style::default().fg(palette::DIAGRAM_EDGE),
                        ));
                    }
                }
                DiagramStatus::Unsupported => {
                    lines.push(Line::from(vec![
                        Span::styled("  Unsupported diagram type ", styles::text_muted()),
                        Span::styled(format!("\"{}\"", slot.spec.kind), styles::text_secondary()),
                    ]));
                    lines.push(Line::styled(
                        "  Switch to the Raw Output tab to see its source",
                        styles::text_muted(),
                    ));
                }
            }
            lines.push(Line::raw(""));
        }
        lines
    }
}

impl Widget for DiagramView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let lines = self.lines();
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}

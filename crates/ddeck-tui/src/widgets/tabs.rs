//! Result mode tab bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use ddeck_app::results::{ResultTab, TabAvailability};

use crate::theme::styles;

/// The diagram/details/raw selector bar above the result panel.
pub struct ResultTabsBar {
    active: ResultTab,
    availability: TabAvailability,
}

impl ResultTabsBar {
    pub fn new(active: ResultTab, availability: TabAvailability) -> Self {
        Self {
            active,
            availability,
        }
    }

    /// Tabs stay selectable even without content; the panel itself
    /// explains what is missing. Only the label is dimmed.
    fn has_content(&self, tab: ResultTab) -> bool {
        match tab {
            ResultTab::Diagram => self.availability.diagrams,
            ResultTab::Details => {
                self.availability.architecture
                    || self.availability.apis
                    || self.availability.components
            }
            ResultTab::Raw => true,
        }
    }
}

impl Widget for ResultTabsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (index, tab) in ResultTab::ALL.into_iter().enumerate() {
            let label = format!(" {} {} ", index + 1, tab.label());
            let style = if tab == self.active {
                styles::focused_selected()
            } else if self.has_content(tab) {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

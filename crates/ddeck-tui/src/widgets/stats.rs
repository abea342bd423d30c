//! Dashboard statistic cards
//!
//! Four cards derived from the local history: total designs, designs
//! from the trailing seven days, and the per-style counts the dashboard
//! tracks.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};

use ddeck_core::DesignStats;

use crate::theme::{palette, styles};

/// Stat card row for the dashboard
pub struct StatsCards<'a> {
    stats: &'a DesignStats,
    loading: bool,
}

impl<'a> StatsCards<'a> {
    pub fn new(stats: &'a DesignStats) -> Self {
        Self {
            stats,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn cards(&self) -> [(String, &'static str, Color); 4] {
        [
            (
                self.stats.total.to_string(),
                "Total Designs",
                palette::STAT_TOTAL,
            ),
            (
                self.stats.recent.to_string(),
                "Last 7 Days",
                palette::STAT_RECENT,
            ),
            (
                self.stats.microservices.to_string(),
                "Microservices",
                palette::STAT_MICROSERVICES,
            ),
            (
                self.stats.monolith.to_string(),
                "Monolithic",
                palette::STAT_MONOLITH,
            ),
        ]
    }
}

impl Widget for StatsCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((value, label, color), column) in self.cards().into_iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*column);
            block.render(*column, buf);
            if inner.height == 0 || inner.width == 0 {
                continue;
            }

            let value_text = if self.loading {
                "…".to_string()
            } else {
                value
            };
            let value_line = Line::styled(
                value_text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
            buf.set_line(inner.x + 1, inner.y, &value_line, inner.width);

            if inner.height > 1 {
                let label_line = Line::styled(label, styles::text_muted());
                buf.set_line(inner.x + 1, inner.y + 1, &label_line, inner.width);
            }
        }
    }
}

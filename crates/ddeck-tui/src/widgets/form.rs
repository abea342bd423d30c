//! Design creation form widget
//!
//! Prompt textarea with live character counter, services input, style
//! and complexity selectors, plus the status line for the submit
//! lifecycle (generating spinner / error message).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ddeck_app::form::{DesignForm, FormField};
use ddeck_app::Lifecycle;
use ddeck_core::{ArchStyle, MAX_PROMPT_CHARS};

use crate::theme::styles;

pub struct DesignFormView<'a> {
    form: &'a DesignForm,
    lifecycle: &'a Lifecycle,
}

impl<'a> DesignFormView<'a> {
    pub fn new(form: &'a DesignForm, lifecycle: &'a Lifecycle) -> Self {
        Self { form, lifecycle }
    }

    fn status_line(&self) -> Option<Line<'_>> {
        if let Some(error) = &self.form.error {
            return Some(Line::styled(error.as_str(), styles::status_red()));
        }
        match self.lifecycle {
            Lifecycle::Submitting => Some(Line::styled(
                "Generating design… this can take a moment",
                styles::status_yellow(),
            )),
            Lifecycle::Error(message) => Some(Line::styled(message.as_str(), styles::status_red())),
            Lifecycle::Idle | Lifecycle::Viewing => None,
        }
    }
}

impl Widget for DesignFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Min(5),    // Prompt
            Constraint::Length(3), // Services
            Constraint::Length(3), // Style + complexity selectors
            Constraint::Length(1), // Status line
        ])
        .split(area);

        // Prompt with live counter in the title.
        let counter = format!(" {}/{} ", self.form.prompt_chars(), MAX_PROMPT_CHARS);
        let prompt_block = styles::glass_block(self.form.focus == FormField::Prompt)
            .title(Span::styled(" Requirements ", styles::accent()))
            .title_top(Line::styled(counter, styles::text_muted()).right_aligned());
        let prompt_text = if self.form.prompt.is_empty() {
            Paragraph::new(Line::styled(
                "Describe the system you want designed…",
                styles::text_muted(),
            ))
        } else {
            Paragraph::new(self.form.prompt.as_str()).style(styles::text_primary())
        };
        prompt_text
            .wrap(Wrap { trim: false })
            .block(prompt_block)
            .render(rows[0], buf);

        // Services (comma separated, free text).
        let services_block = styles::glass_block(self.form.focus == FormField::Services)
            .title(Span::styled(" Services (comma separated) ", styles::accent()));
        Paragraph::new(self.form.services.as_str())
            .style(styles::text_primary())
            .block(services_block)
            .render(rows[1], buf);

        // Selectors side by side.
        let selectors = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(rows[2]);
        render_style_selector(self.form, selectors[0], buf);
        render_complexity_selector(self.form, selectors[1], buf);

        if let Some(line) = self.status_line() {
            buf.set_line(rows[3].x + 1, rows[3].y, &line, rows[3].width);
        }
    }
}

fn render_style_selector(form: &DesignForm, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(form.focus == FormField::Style)
        .title(Span::styled(" Style ", styles::accent()));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    let mut spans = Vec::new();
    for style in ArchStyle::ALL {
        let selected = style == form.style;
        spans.push(Span::styled(
            format!(" {} ", style.label()),
            if selected {
                styles::focused_selected()
            } else {
                styles::text_muted()
            },
        ));
    }
    buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
}

fn render_complexity_selector(form: &DesignForm, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(form.focus == FormField::Complexity)
        .title(Span::styled(" Complexity ", styles::accent()));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", form.complexity.label()),
            styles::focused_selected(),
        ),
        Span::styled(" ◂ ▸ toggle", styles::text_muted()),
    ]);
    buf.set_line(inner.x, inner.y, &line, inner.width);
}

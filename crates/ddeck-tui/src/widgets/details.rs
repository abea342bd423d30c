//! Structured details panel
//!
//! Four collapsible sections over the selected design: the original
//! prompt, the architecture narrative, the API list and the component
//! list. Partial payload entries render with fallbacks instead of
//! being dropped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ddeck_app::results::{Section, SectionState};
use ddeck_core::Design;

use crate::theme::styles;

pub struct DetailsView<'a> {
    design: &'a Design,
    sections: &'a SectionState,
    scroll: u16,
}

impl<'a> DetailsView<'a> {
    pub fn new(design: &'a Design, sections: &'a SectionState, scroll: u16) -> Self {
        Self {
            design,
            sections,
            scroll,
        }
    }

    fn section_header(&self, section: Section, title: &str, count: Option<usize>) -> Line<'a> {
        let arrow = if self.sections.is_expanded(section) {
            "▾"
        } else {
            "▸"
        };
        let suffix = match count {
            Some(n) => format!(" ({n})"),
            None => String::new(),
        };
        Line::from(vec![
            Span::styled(format!(" {arrow} "), styles::accent()),
            Span::styled(format!("{title}{suffix}"), styles::accent_bold()),
        ])
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let payload = self.design.payload();

        // Prompt section: always present, it is a required input.
        lines.push(self.section_header(Section::Prompt, "Prompt", None));
        if self.sections.is_expanded(Section::Prompt) {
            lines.push(Line::styled(
                format!("   {}", self.design.prompt),
                styles::text_primary(),
            ));
            let meta = format!(
                "   {} · {}",
                self.design.style.label(),
                self.design.complexity.label()
            );
            lines.push(Line::styled(meta, styles::text_muted()));
            if !self.design.services.is_empty() {
                lines.push(Line::styled(
                    format!("   Services: {}", self.design.services.join(", ")),
                    styles::text_muted(),
                ));
            }
        }
        lines.push(Line::raw(""));

        lines.push(self.section_header(Section::Architecture, "Architecture", None));
        if self.sections.is_expanded(Section::Architecture) {
            match payload.and_then(|p| p.narrative()) {
                Some(narrative) => {
                    for row in narrative.lines() {
                        lines.push(Line::styled(
                            format!("   {row}"),
                            styles::text_primary(),
                        ));
                    }
                }
                None => lines.push(Line::styled(
                    "   No architecture description",
                    styles::text_muted(),
                )),
            }
        }
        lines.push(Line::raw(""));

        let apis = payload.map(|p| p.apis.as_slice()).unwrap_or_default();
        lines.push(self.section_header(Section::Apis, "APIs", Some(apis.len())));
        if self.sections.is_expanded(Section::Apis) {
            if apis.is_empty() {
                lines.push(Line::styled("   No API definitions", styles::text_muted()));
            }
            for (index, api) in apis.iter().enumerate() {
                let mut spans = vec![
                    Span::styled(
                        format!("   {:<6}", api.method_label()),
                        styles::status_green(),
                    ),
                    Span::styled(api.display_name(index), styles::text_primary()),
                ];
                if let Some(endpoint) = api.endpoint.as_deref() {
                    spans.push(Span::styled(
                        format!("  {endpoint}"),
                        styles::text_secondary(),
                    ));
                }
                lines.push(Line::from(spans));
                if let Some(description) = api.description.as_deref() {
                    lines.push(Line::styled(
                        format!("         {description}"),
                        styles::text_muted(),
                    ));
                }
            }
        }
        lines.push(Line::raw(""));

        let components = payload.map(|p| p.components.as_slice()).unwrap_or_default();
        lines.push(self.section_header(Section::Components, "Components", Some(components.len())));
        if self.sections.is_expanded(Section::Components) {
            if components.is_empty() {
                lines.push(Line::styled("   No components", styles::text_muted()));
            }
            for (index, component) in components.iter().enumerate() {
                let mut spans = vec![Span::styled(
                    format!("   {}", component.display_name(index)),
                    styles::text_primary(),
                )];
                if let Some(technology) = component.technology.as_deref() {
                    spans.push(Span::styled(
                        format!("  [{technology}]"),
                        styles::text_secondary(),
                    ));
                }
                lines.push(Line::from(spans));
                if let Some(description) = component.description.as_deref() {
                    lines.push(Line::styled(
                        format!("     {description}"),
                        styles::text_muted(),
                    ));
                }
            }
        }

        lines
    }
}

impl Widget for DetailsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ddeck_client::test_utils::sample_design;
    use ddeck_core::{ApiSpec, ComponentSpec, DesignPayload};

    fn design_with_details() -> Design {
        let mut design = sample_design("d1");
        design.raw_output = Some(DesignPayload {
            architecture: Some("A gateway fronting two services".to_string()),
            apis: vec![
                ApiSpec {
                    name: Some("SendMessage".to_string()),
                    method: Some("POST".to_string()),
                    endpoint: Some("/messages".to_string()),
                    description: Some("Queue a message".to_string()),
                },
                ApiSpec::default(),
            ],
            components: vec![ComponentSpec {
                name: Some("MessageStore".to_string()),
                technology: Some("PostgreSQL".to_string()),
                description: None,
            }],
            ..Default::default()
        });
        design
    }

    #[test]
    fn test_details_show_all_sections() {
        let design = design_with_details();
        let sections = SectionState::default();
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailsView::new(&design, &sections, 0),
            Rect::new(0, 0, 80, 28),
        );

        assert!(term.buffer_contains("Prompt"));
        assert!(term.buffer_contains("A gateway fronting two services"));
        assert!(term.buffer_contains("POST"));
        assert!(term.buffer_contains("SendMessage"));
        assert!(term.buffer_contains("MessageStore"));
        assert!(term.buffer_contains("[PostgreSQL]"));
    }

    #[test]
    fn test_partial_api_entry_gets_fallbacks() {
        let design = design_with_details();
        let sections = SectionState::default();
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailsView::new(&design, &sections, 0),
            Rect::new(0, 0, 80, 28),
        );

        // The empty ApiSpec renders as "GET API 2".
        assert!(term.buffer_contains("GET"));
        assert!(term.buffer_contains("API 2"));
    }

    #[test]
    fn test_collapsed_section_hides_body() {
        let design = design_with_details();
        let mut sections = SectionState::default();
        sections.toggle(Section::Architecture);

        let mut term = TestTerminal::new();
        term.render_widget(
            DetailsView::new(&design, &sections, 0),
            Rect::new(0, 0, 80, 28),
        );

        assert!(!term.buffer_contains("A gateway fronting two services"));
        // Sibling sections stay expanded.
        assert!(term.buffer_contains("SendMessage"));
    }

    #[test]
    fn test_missing_payload_shows_placeholders() {
        let design = sample_design("d1");
        let sections = SectionState::default();
        let mut term = TestTerminal::new();
        term.render_widget(
            DetailsView::new(&design, &sections, 0),
            Rect::new(0, 0, 80, 28),
        );

        assert!(term.buffer_contains("No architecture description"));
        assert!(term.buffer_contains("No API definitions"));
        assert!(term.buffer_contains("APIs (0)"));
    }
}

//! Result view state and render-mode dispatch
//!
//! Given the heterogeneous payload of the selected design, this module
//! decides which presentation modes are valid (diagram /
//! structured-detail / raw), tracks the expand/collapse flag of each
//! detail sub-section, and holds the per-diagram render slots.
//!
//! All of this is transient UI state: selecting a different design
//! resets it to the defaults (diagram tab active, every section
//! expanded).

use ddeck_core::{Design, DiagramSpec};

use crate::diagram::{DiagramVisual, RenderAttempt, RenderError};

/// The three mutually exclusive render modes of a design's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Diagram,
    Details,
    Raw,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Diagram, ResultTab::Details, ResultTab::Raw];

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Diagram => "Diagram",
            ResultTab::Details => "Details",
            ResultTab::Raw => "Raw Output",
        }
    }

    pub fn next(&self) -> ResultTab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> ResultTab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The four collapsible sub-sections of the details tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prompt,
    Architecture,
    Apis,
    Components,
}

/// Independent expand/collapse flags, one per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    pub prompt: bool,
    pub architecture: bool,
    pub apis: bool,
    pub components: bool,
}

impl Default for SectionState {
    /// Sections default to expanded.
    fn default() -> Self {
        Self {
            prompt: true,
            architecture: true,
            apis: true,
            components: true,
        }
    }
}

impl SectionState {
    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::Prompt => &mut self.prompt,
            Section::Architecture => &mut self.architecture,
            Section::Apis => &mut self.apis,
            Section::Components => &mut self.components,
        };
        *flag = !*flag;
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::Prompt => self.prompt,
            Section::Architecture => self.architecture,
            Section::Apis => self.apis,
            Section::Components => self.components,
        }
    }
}

/// Which tabs have content for a given design.
///
/// The details and raw tabs are always available: the prompt is a
/// required input field, and the raw serialization is the guaranteed
/// fallback. Only the diagram tab depends on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabAvailability {
    pub diagrams: bool,
    pub architecture: bool,
    pub apis: bool,
    pub components: bool,
}

impl TabAvailability {
    pub fn of(design: &Design) -> Self {
        match design.payload() {
            Some(payload) => Self {
                diagrams: !payload.diagrams.is_empty(),
                architecture: payload.narrative().is_some(),
                apis: !payload.apis.is_empty(),
                components: !payload.components.is_empty(),
            },
            None => Self::default(),
        }
    }
}

/// Render outcome of one diagram entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramStatus {
    /// Declared kind is not one this client renders; shown as a
    /// placeholder pointing at the raw tab.
    Unsupported,
    /// Recognized kind, render in flight.
    Pending,
    Rendered(DiagramVisual),
    Failed(RenderError),
}

/// One diagram entry plus its independent render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSlot {
    pub spec: DiagramSpec,
    pub status: DiagramStatus,
}

/// Transient view state for the currently selected design.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    pub tab: ResultTab,
    pub sections: SectionState,
    pub availability: TabAvailability,
    pub diagrams: Vec<DiagramSlot>,
    /// Identifier of the in-flight render batch; completions carrying
    /// any other attempt id are stale and dropped.
    pub attempt: RenderAttempt,
    pub scroll: u16,
}

impl ResultView {
    /// Fresh view state for a newly selected design.
    ///
    /// Returns the view plus the recognized diagram sources that need
    /// rendering, as `(slot index, content)` pairs keyed by the view's
    /// new attempt id.
    pub fn for_design(design: &Design) -> (Self, Vec<(usize, String)>) {
        let availability = TabAvailability::of(design);
        let mut slots = Vec::new();
        let mut pending = Vec::new();

        if let Some(payload) = design.payload() {
            for spec in &payload.diagrams {
                let status = if spec.is_recognized() {
                    pending.push((slots.len(), spec.content.clone()));
                    DiagramStatus::Pending
                } else {
                    DiagramStatus::Unsupported
                };
                slots.push(DiagramSlot {
                    spec: spec.clone(),
                    status,
                });
            }
        }

        let view = Self {
            tab: ResultTab::default(),
            sections: SectionState::default(),
            availability,
            diagrams: slots,
            attempt: RenderAttempt::new(),
            scroll: 0,
        };
        (view, pending)
    }

    /// Apply a completed render. Returns `false` (and changes nothing)
    /// when the completion is stale or out of range.
    pub fn apply_render(
        &mut self,
        attempt: RenderAttempt,
        index: usize,
        result: Result<DiagramVisual, RenderError>,
    ) -> bool {
        if attempt != self.attempt {
            return false;
        }
        let Some(slot) = self.diagrams.get_mut(index) else {
            return false;
        };
        slot.status = match result {
            Ok(visual) => DiagramStatus::Rendered(visual),
            Err(err) => DiagramStatus::Failed(err),
        };
        true
    }
}

/// Deterministic pretty-printed serialization of the raw payload.
///
/// Typed fields serialize in declaration order and unknown keys in
/// arrival order, so repeated calls for the same design are
/// byte-identical. This is the guaranteed fallback view.
pub fn raw_payload_text(design: &Design) -> String {
    match design.payload() {
        Some(payload) => {
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
        }
        None => "null".to_string(),
    }
}

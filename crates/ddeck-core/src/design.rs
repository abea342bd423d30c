//! Domain types for designs and their generated payloads
//!
//! These structs double as the wire format for the design service
//! (camelCase JSON). The payload side is deliberately tolerant: every
//! generated field may be absent, and absence is a normal state the
//! renderers must handle, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum prompt length enforced at the input boundary.
///
/// The service may or may not enforce this server-side; the client
/// stops accepting characters past this point.
pub const MAX_PROMPT_CHARS: usize = 1000;

/// Architecture style requested for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchStyle {
    #[default]
    Microservices,
    Monolith,
    EventDriven,
    Serverless,
}

impl ArchStyle {
    /// All styles in form-cycling order.
    pub const ALL: [ArchStyle; 4] = [
        ArchStyle::Microservices,
        ArchStyle::Monolith,
        ArchStyle::EventDriven,
        ArchStyle::Serverless,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ArchStyle::Microservices => "Microservices",
            ArchStyle::Monolith => "Monolithic",
            ArchStyle::EventDriven => "Event-Driven",
            ArchStyle::Serverless => "Serverless",
        }
    }

    /// Next style in cycling order (wraps around).
    pub fn next(&self) -> ArchStyle {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Complexity level requested for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Basic,
    Advanced,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Advanced => "Advanced",
        }
    }

    pub fn toggled(&self) -> Complexity {
        match self {
            Complexity::Basic => Complexity::Advanced,
            Complexity::Advanced => Complexity::Basic,
        }
    }
}

/// User-supplied inputs for a new design request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub prompt: String,
    pub style: ArchStyle,
    pub complexity: Complexity,
    #[serde(default)]
    pub services: Vec<String>,
}

impl DesignSpec {
    /// Validate local constraints before any network activity.
    ///
    /// A whitespace-only prompt is rejected here so the gateway never
    /// issues a request for it.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(Error::validation("Please describe your system requirements"));
        }
        Ok(())
    }

    /// Split a comma-separated services string into trimmed, non-empty
    /// entries. Order is preserved; duplicates are not removed.
    pub fn parse_services(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A single diagram descriptor inside a design payload.
///
/// `kind` is free-form server data. Only the kinds this client
/// recognizes are delegated to the diagram renderer; anything else
/// gets a placeholder with an escape hatch to the raw tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
}

impl DiagramSpec {
    /// Whether this client knows how to render the declared kind.
    pub fn is_recognized(&self) -> bool {
        self.kind.trim().eq_ignore_ascii_case("mermaid")
    }
}

/// A generated API descriptor. Every field except the struct itself is
/// optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ApiSpec {
    /// Display name, falling back to a positional label.
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("API {}", index + 1),
        }
    }

    /// HTTP verb label; a missing verb displays as GET.
    pub fn method_label(&self) -> &str {
        match self.method.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m,
            _ => "GET",
        }
    }
}

/// A generated system-component descriptor; symmetric policy to
/// [`ApiSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
}

impl ComponentSpec {
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Component {}", index + 1),
        }
    }
}

/// The loosely structured generated-architecture payload.
///
/// Unknown keys are retained in `extra` (in arrival order) so the raw
/// tab can show the payload exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignPayload {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagrams: Vec<DiagramSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<ApiSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentSpec>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DesignPayload {
    /// Architecture narrative, treating whitespace-only text as absent.
    pub fn narrative(&self) -> Option<&str> {
        self.architecture
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
            && self.narrative().is_none()
            && self.apis.is_empty()
            && self.components.is_empty()
            && self.extra.is_empty()
    }
}

/// One user-submitted specification plus its generated artifact.
///
/// Immutable once returned by the service; the client never patches a
/// design in place, it only replaces its whole history on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub prompt: String,
    pub style: ArchStyle,
    pub complexity: Complexity,
    #[serde(default)]
    pub services: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<DesignPayload>,
}

impl Design {
    /// The generated payload, if the service has produced one yet.
    ///
    /// `None` (or an empty payload) after a create/fetch is a valid
    /// "still generating" state, not an error.
    pub fn payload(&self) -> Option<&DesignPayload> {
        self.raw_output.as_ref()
    }

    pub fn has_payload(&self) -> bool {
        self.raw_output.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Prompt truncated for list display.
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        if self.prompt.chars().count() <= max_chars {
            self.prompt.clone()
        } else {
            let truncated: String = self.prompt.chars().take(max_chars).collect();
            format!("{truncated}…")
        }
    }
}

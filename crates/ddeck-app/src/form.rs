//! Create-form state
//!
//! Holds the four design inputs while the user edits them. Input is
//! preserved across a failed submit so a retry needs no retyping; it
//! is cleared only after a successful one.

use ddeck_core::{ArchStyle, Complexity, DesignSpec, MAX_PROMPT_CHARS};

/// Which form field currently receives character input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Prompt,
    Services,
    Style,
    Complexity,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Prompt,
        FormField::Services,
        FormField::Style,
        FormField::Complexity,
    ];

    pub fn next(&self) -> FormField {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> FormField {
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Editable state of the design creation form.
#[derive(Debug, Clone, Default)]
pub struct DesignForm {
    pub prompt: String,
    /// Raw comma-separated services text; parsed at submit time.
    pub services: String,
    pub style: ArchStyle,
    pub complexity: Complexity,
    pub focus: FormField,
    /// Local validation error shown inline under the form.
    pub error: Option<String>,
}

impl DesignForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character into the focused text field.
    ///
    /// The prompt stops accepting input at [`MAX_PROMPT_CHARS`]; the
    /// style/complexity fields ignore character input entirely.
    pub fn insert_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            FormField::Prompt => {
                if self.prompt.chars().count() < MAX_PROMPT_CHARS {
                    self.prompt.push(c);
                }
            }
            FormField::Services => self.services.push(c),
            FormField::Style | FormField::Complexity => {}
        }
    }

    /// Remove the last character of the focused text field.
    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            FormField::Prompt => {
                self.prompt.pop();
            }
            FormField::Services => {
                self.services.pop();
            }
            FormField::Style | FormField::Complexity => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Cycle the architecture style (also used by Left/Right on the
    /// style field).
    pub fn cycle_style(&mut self) {
        self.style = self.style.next();
    }

    pub fn toggle_complexity(&mut self) {
        self.complexity = self.complexity.toggled();
    }

    /// Characters used out of the prompt budget, for the live counter.
    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }

    /// Build the submission spec from the current inputs.
    pub fn to_spec(&self) -> DesignSpec {
        DesignSpec {
            prompt: self.prompt.trim().to_string(),
            style: self.style,
            complexity: self.complexity,
            services: DesignSpec::parse_services(&self.services),
        }
    }

    /// Clear the text inputs after a successful submit. Style and
    /// complexity keep their values for the next design.
    pub fn reset_inputs(&mut self) {
        self.prompt.clear();
        self.services.clear();
        self.error = None;
    }
}

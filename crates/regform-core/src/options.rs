//! Behavior options for the registration form.

use serde::{Deserialize, Serialize};

/// When edits trigger validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Validate on submit. After the first submission attempt, each edit
    /// re-validates the edited field.
    #[default]
    OnSubmit,
    /// Validate the edited field on every edit.
    OnChange,
}

/// Options for a form instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub validation_mode: ValidationMode,
    /// Whether the location section starts out visible.
    pub show_location_section: bool,
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    #[must_use]
    pub fn with_location_section(mut self, shown: bool) -> Self {
        self.show_location_section = shown;
        self
    }
}

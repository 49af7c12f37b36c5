//! Transient UI state of the registration form.

use std::collections::BTreeMap;

use regform_model::{Field, FormValues};
use regform_validate::{ValidationContext, ValidationReport};

use crate::location::{LocationCascade, LocationTable};

/// Everything the form shows: values, per-field errors, the location
/// option lists and the section toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: BTreeMap<Field, Vec<String>>,
    pub location: LocationCascade,
    pub show_location: bool,
    pub submit_attempted: bool,
}

impl FormState {
    pub fn new(table: LocationTable, show_location: bool) -> Self {
        Self {
            values: FormValues::new(),
            errors: BTreeMap::new(),
            location: LocationCascade::new(table),
            show_location,
            submit_attempted: false,
        }
    }

    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::new().with_location(self.show_location)
    }

    /// Whether a field is currently shown (and therefore validated).
    pub fn is_visible(&self, field: Field) -> bool {
        self.show_location || !Field::LOCATION.contains(&field)
    }

    /// Whether a field currently accepts input.
    ///
    /// Hidden fields and option-less state/city selectors are disabled.
    pub fn is_enabled(&self, field: Field) -> bool {
        if !self.is_visible(field) {
            return false;
        }
        match field {
            Field::State => self.location.state_enabled(),
            Field::City => self.location.city_enabled(),
            _ => true,
        }
    }

    pub fn errors_for(&self, field: Field) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Replace every displayed error with the report's.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        self.errors = report.messages_by_field();
    }

    /// Replace the displayed errors of one field.
    pub fn set_field_errors(&mut self, field: Field, messages: Vec<String>) {
        if messages.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, messages);
        }
    }

    pub fn clear_location_errors(&mut self) {
        for field in Field::LOCATION {
            self.errors.remove(&field);
        }
    }
}

//! The registration form widget.
//!
//! [`RegistrationForm::update`] is the single entry point for input events.
//! It mutates [`FormState`] synchronously and, on a valid submission, calls
//! the completion handler exactly once.

use tracing::{debug, info, info_span, warn};

use regform_model::{Field, RegistrationData};
use regform_validate::{Check, Issue, ValidationReport, validate_field, validate_form};

use crate::completion::{Acknowledge, CompletionHandler};
use crate::location::LocationTable;
use crate::message::FormMessage;
use crate::options::{FormOptions, ValidationMode};
use crate::state::FormState;

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// State changed; nothing was submitted.
    Updated,
    /// Submission passed validation and the handler was called.
    Submitted(RegistrationData),
    /// Submission failed validation; errors are in the state.
    Rejected(ValidationReport),
    /// Input for a disabled field, or a selection outside the offered
    /// options. Nothing changed.
    Ignored(Field),
}

pub struct RegistrationForm<H = Acknowledge> {
    state: FormState,
    options: FormOptions,
    handler: H,
}

impl RegistrationForm<Acknowledge> {
    /// Form with the built-in location table and the acknowledging handler.
    pub fn new(options: FormOptions) -> Self {
        Self::with_handler(options, Acknowledge::new())
    }
}

impl<H: CompletionHandler> RegistrationForm<H> {
    pub fn with_handler(options: FormOptions, handler: H) -> Self {
        Self {
            state: FormState::new(LocationTable::builtin(), options.show_location_section),
            options,
            handler,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn update(&mut self, message: FormMessage) -> UpdateOutcome {
        match message {
            FormMessage::FieldChanged { field, value } => self.change_field(field, &value),
            FormMessage::CountrySelected(country) => self.change_field(Field::Country, &country),
            FormMessage::StateSelected(state) => self.change_field(Field::State, &state),
            FormMessage::CitySelected(city) => self.change_field(Field::City, &city),
            FormMessage::LocationSectionToggled => {
                self.toggle_location();
                UpdateOutcome::Updated
            }
            FormMessage::Submit => self.submit(),
        }
    }

    /// Run the full schema; on success build the record and hand it to the
    /// completion handler.
    pub fn submit(&mut self) -> UpdateOutcome {
        let span = info_span!("submit", location_shown = self.state.show_location);
        let _guard = span.enter();

        self.state.submit_attempted = true;
        let ctx = self.state.validation_context();
        let report = validate_form(&self.state.values, &ctx);
        self.state.apply_report(&report);
        if report.has_errors() {
            info!(
                issue_count = report.error_count(),
                invalid_fields = report.invalid_fields().len(),
                "submission rejected"
            );
            return UpdateOutcome::Rejected(report);
        }

        match RegistrationData::from_values(&self.state.values, self.state.show_location) {
            Ok(data) => {
                self.handler.on_complete(&data);
                info!("submission accepted");
                UpdateOutcome::Submitted(data)
            }
            // Unreachable while the schema and the model agree on genders.
            Err(error) => {
                debug!(%error, "could not assemble registration");
                let mut report = ValidationReport::new();
                report.add(Issue::new(Field::Gender, Check::Choice, error.to_string()));
                self.state.apply_report(&report);
                UpdateOutcome::Rejected(report)
            }
        }
    }

    fn change_field(&mut self, field: Field, value: &str) -> UpdateOutcome {
        if !self.state.is_enabled(field) {
            warn!(field = %field, "ignored input for disabled field");
            return UpdateOutcome::Ignored(field);
        }
        let state = &mut self.state;
        let accepted = match field {
            Field::Country => state.location.select_country(&mut state.values, value),
            Field::State => state.location.select_state(&mut state.values, value),
            Field::City => state.location.select_city(&mut state.values, value),
            _ => {
                state.values.set(field, value);
                true
            }
        };
        if !accepted {
            return UpdateOutcome::Ignored(field);
        }
        debug!(field = %field, "field changed");

        if self.should_validate_on_change() {
            // A country or state change also clears its dependents.
            let affected: &[Field] = match field {
                Field::Country => &[Field::Country, Field::State, Field::City],
                Field::State => &[Field::State, Field::City],
                _ => std::slice::from_ref(&field),
            };
            for &field in affected {
                self.revalidate(field);
            }
        }
        UpdateOutcome::Updated
    }

    fn should_validate_on_change(&self) -> bool {
        match self.options.validation_mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.state.submit_attempted,
        }
    }

    fn revalidate(&mut self, field: Field) {
        let ctx = self.state.validation_context();
        let messages = validate_field(field, self.state.values.get(field), &ctx)
            .into_iter()
            .map(|issue| issue.message)
            .collect();
        self.state.set_field_errors(field, messages);
    }

    fn toggle_location(&mut self) {
        self.state.show_location = !self.state.show_location;
        if !self.state.show_location {
            self.state.clear_location_errors();
        } else if self.state.submit_attempted {
            for field in Field::LOCATION {
                self.revalidate(field);
            }
        }
        debug!(shown = self.state.show_location, "location section toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submit_is_rejected() {
        let mut form = RegistrationForm::new(FormOptions::default());
        let outcome = form.update(FormMessage::Submit);
        assert!(matches!(outcome, UpdateOutcome::Rejected(_)));
        assert!(form.state().submit_attempted);
        assert_eq!(
            form.state().errors_for(Field::FirstName),
            ["First name is required"]
        );
        assert!(form.state().errors_for(Field::Country).is_empty());
        assert_eq!(form.handler().completed(), 0);
    }

    #[test]
    fn test_no_validation_before_first_submit() {
        let mut form = RegistrationForm::new(FormOptions::default());
        form.update(FormMessage::field_changed(Field::Mobile, "123"));
        assert!(!form.state().has_errors());
    }

    #[test]
    fn test_disabled_selectors_ignore_input() {
        let mut form = RegistrationForm::new(FormOptions::new().with_location_section(true));
        let outcome = form.update(FormMessage::StateSelected("Texas".to_string()));
        assert_eq!(outcome, UpdateOutcome::Ignored(Field::State));
        assert_eq!(form.state().values.get(Field::State), "");

        form.update(FormMessage::CountrySelected("USA".to_string()));
        let outcome = form.update(FormMessage::CitySelected("Austin".to_string()));
        assert_eq!(outcome, UpdateOutcome::Ignored(Field::City));
        assert_eq!(form.state().values.get(Field::City), "");
    }

    #[test]
    fn test_hidden_section_ignores_location_input() {
        let mut form = RegistrationForm::new(FormOptions::default());
        let outcome = form.update(FormMessage::CountrySelected("India".to_string()));
        assert_eq!(outcome, UpdateOutcome::Ignored(Field::Country));
        let outcome = form.update(FormMessage::field_changed(Field::PostalCode, "415110"));
        assert_eq!(outcome, UpdateOutcome::Ignored(Field::PostalCode));
        assert_eq!(form.state().values.get(Field::Country), "");
        assert_eq!(form.state().values.get(Field::PostalCode), "");
        assert!(form.state().location.states().is_empty());
    }

    #[test]
    fn test_on_change_mode_validates_edits() {
        let options = FormOptions::new().with_validation_mode(ValidationMode::OnChange);
        let mut form = RegistrationForm::new(options);
        form.update(FormMessage::field_changed(Field::Mobile, "123"));
        assert_eq!(
            form.state().errors_for(Field::Mobile),
            ["Invalid mobile number"]
        );
        form.update(FormMessage::field_changed(Field::Mobile, "9876543210"));
        assert!(form.state().errors_for(Field::Mobile).is_empty());
    }
}

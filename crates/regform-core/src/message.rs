//! Input events accepted by the registration form.

use regform_model::Field;

/// A discrete user interaction.
///
/// All state changes of [`crate::RegistrationForm`] go through these
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Text typed into (or option picked for) a field.
    ///
    /// Country, state and city edits are routed through the location
    /// cascade, same as the dedicated selection messages.
    FieldChanged { field: Field, value: String },

    /// Country picked from the country selector.
    CountrySelected(String),

    /// State picked from the state selector.
    StateSelected(String),

    /// City picked from the city selector.
    CitySelected(String),

    /// Location section checkbox clicked.
    LocationSectionToggled,

    /// Submit control activated.
    Submit,
}

impl FormMessage {
    pub fn field_changed(field: Field, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

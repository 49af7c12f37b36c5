//! The validated registration record handed to the completion callback.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::Field;
use crate::gender::Gender;
use crate::values::FormValues;

/// Temporary address details, present only when the location section was
/// enabled at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub country: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
}

/// A completed registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    /// Kept verbatim in `YYYY/MM/DD` form; the value is range-checked, not a
    /// calendar date.
    pub date_of_birth: String,
    pub gender: Gender,
    pub permanent_address: String,
    #[serde(flatten)]
    pub location: Option<LocationDetails>,
}

impl RegistrationData {
    /// Assemble a record from raw values.
    ///
    /// Callers validate first; this only fails when the gender value cannot
    /// be parsed, which a passing validation rules out.
    pub fn from_values(values: &FormValues, include_location: bool) -> Result<Self> {
        let gender = match values.get(Field::Gender) {
            "" => return Err(ModelError::MissingValue(Field::Gender)),
            raw => raw.parse::<Gender>()?,
        };
        let location = include_location.then(|| LocationDetails {
            country: values.country.clone(),
            state: values.state.clone(),
            city: values.city.clone(),
            postal_code: values.postal_code.clone(),
        });
        Ok(Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            user_name: values.user_name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            mobile: values.mobile.clone(),
            date_of_birth: values.date_of_birth.clone(),
            gender,
            permanent_address: values.permanent_address.clone(),
            location,
        })
    }

    /// Copy of the record with the password replaced, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            password: "*".repeat(self.password.chars().count()),
            ..self.clone()
        }
    }
}

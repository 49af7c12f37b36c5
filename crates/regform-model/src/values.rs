//! Raw, unvalidated field values as typed by the user.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current text of every form input.
///
/// Select inputs hold the chosen option's value, or an empty string when
/// nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub gender: String,
    pub permanent_address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::UserName => &self.user_name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Gender => &self.gender,
            Field::PermanentAddress => &self.permanent_address,
            Field::Country => &self.country,
            Field::State => &self.state,
            Field::City => &self.city,
            Field::PostalCode => &self.postal_code,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot_mut(field).clear();
    }

    /// Builder-style setter, mostly for tests and one-shot checks.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate over `(field, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::UserName => &mut self.user_name,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Gender => &mut self.gender,
            Field::PermanentAddress => &mut self.permanent_address,
            Field::Country => &mut self.country,
            Field::State => &mut self.state,
            Field::City => &mut self.city,
            Field::PostalCode => &mut self.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut values = FormValues::new();
        values.set(Field::City, "Pune");
        assert_eq!(values.get(Field::City), "Pune");
        values.clear(Field::City);
        assert_eq!(values.get(Field::City), "");
    }

    #[test]
    fn test_iter_follows_render_order() {
        let values = FormValues::new().with(Field::FirstName, "Ada");
        let first = values.iter().next().unwrap();
        assert_eq!(first, (Field::FirstName, "Ada"));
        assert_eq!(values.iter().count(), Field::ALL.len());
    }
}

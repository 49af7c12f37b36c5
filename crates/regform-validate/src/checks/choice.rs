//! Presence and option-list checks for select inputs.

use regform_model::Field;

use crate::issue::{Check, Issue};

pub fn check_present(field: Field, value: &str, message: &str) -> Option<Issue> {
    value
        .is_empty()
        .then(|| Issue::new(field, Check::Required, message))
}

pub fn check_one_of(
    field: Field,
    value: &str,
    choices: &[&str],
    missing: &str,
) -> Option<Issue> {
    if value.is_empty() {
        return Some(Issue::new(field, Check::Required, missing));
    }
    if choices.contains(&value) {
        return None;
    }
    Some(Issue::new(
        field,
        Check::Choice,
        format!("{} must be one of {}", field.label(), choices.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: &[&str] = &["Male", "Female", "Other"];

    #[test]
    fn test_one_of() {
        assert!(check_one_of(Field::Gender, "Other", CHOICES, "required").is_none());

        let missing = check_one_of(Field::Gender, "", CHOICES, "required").unwrap();
        assert_eq!(missing.check, Check::Required);
        assert_eq!(missing.message, "required");

        let unknown = check_one_of(Field::Gender, "Robot", CHOICES, "required").unwrap();
        assert_eq!(unknown.check, Check::Choice);
        assert_eq!(unknown.message, "Gender must be one of Male, Female, Other");
    }

    #[test]
    fn test_present() {
        assert!(check_present(Field::City, "Pune", "City is required").is_none());
        assert!(check_present(Field::City, "", "City is required").is_some());
    }
}

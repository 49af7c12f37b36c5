//! Password composition.

use regform_model::Field;

use crate::issue::{CharClass, Check, Issue};

/// Report one issue per character class missing from `value`.
pub fn check(field: Field, value: &str) -> Vec<Issue> {
    CharClass::ALL
        .into_iter()
        .filter(|class| !value.chars().any(|c| class.contains(c)))
        .map(|class| Issue::new(field, Check::Composition { class }, class.message()))
        .collect()
}

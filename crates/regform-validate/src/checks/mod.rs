//! Rule check implementations.
//!
//! Each module evaluates one kind of [`Rule`] against a single value.

mod choice;
mod length;
mod password;
pub mod pattern;

use regform_model::Field;

use crate::issue::Issue;
use crate::schema::{FieldSpec, Rule};

/// Run every rule of a [`FieldSpec`] against `value`.
///
/// Rules are independent: all failures are reported, not only the first.
pub fn check_field(spec: &FieldSpec, value: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rule in spec.rules {
        issues.extend(check_rule(spec.field, rule, value));
    }
    issues
}

fn check_rule(field: Field, rule: &Rule, value: &str) -> Vec<Issue> {
    match *rule {
        Rule::MinChars { min, message } => length::check_min(field, value, min, message)
            .into_iter()
            .collect(),
        Rule::MaxChars { max, message } => length::check_max(field, value, max, message)
            .into_iter()
            .collect(),
        Rule::Matches { pattern, message } => pattern::check(field, value, pattern, message)
            .into_iter()
            .collect(),
        Rule::NonEmpty { message } => choice::check_present(field, value, message)
            .into_iter()
            .collect(),
        Rule::PasswordComposition => password::check(field, value),
        Rule::OneOf { choices, missing } => choice::check_one_of(field, value, choices, missing)
            .into_iter()
            .collect(),
    }
}

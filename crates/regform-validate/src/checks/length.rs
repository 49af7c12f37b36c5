//! Character-count limits.
//!
//! Lengths are counted in `char`s, not bytes.

use regform_model::Field;

use crate::issue::{Check, Issue};

pub fn check_min(field: Field, value: &str, min: usize, message: &str) -> Option<Issue> {
    let found = value.chars().count();
    (found < min).then(|| Issue::new(field, Check::MinLength { min, found }, message))
}

pub fn check_max(field: Field, value: &str, max: usize, message: &str) -> Option<Issue> {
    let found = value.chars().count();
    (found > max).then(|| Issue::new(field, Check::MaxLength { max, found }, message))
}

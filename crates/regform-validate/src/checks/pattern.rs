//! Format checks backed by regular expressions.
//!
//! Word characters and digits are ASCII-only (`[[:word:]]`, `[0-9]`), so
//! accented letters or non-Latin digits never satisfy these formats.

use std::sync::LazyLock;

use regex::Regex;
use regform_model::Field;

use crate::issue::{Check, Issue, PatternKind};

/// Word characters and `.`, 1 to 30 of them.
pub static USER_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:word:].]{1,30}$").expect("Invalid user name regex"));

/// `local@domain.tld`. The grammar is intentionally loose: no dots in the
/// local part or domain, and a "TLD" of two or more word characters.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:word:]]+@[[:word:]]+\.[[:word:]]{2,}$").expect("Invalid email regex")
});

pub static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid mobile regex"));

/// `YYYY/MM/DD` with month 01-12 and day 01-31. Day and month are range
/// checked independently, so `2023/02/31` matches.
pub static DATE_OF_BIRTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}/(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])$")
        .expect("Invalid date of birth regex")
});

pub static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid digits regex"));

impl PatternKind {
    pub fn regex(&self) -> &'static Regex {
        match self {
            PatternKind::UserName => &USER_NAME_REGEX,
            PatternKind::Email => &EMAIL_REGEX,
            PatternKind::Mobile => &MOBILE_REGEX,
            PatternKind::DateOfBirth => &DATE_OF_BIRTH_REGEX,
            PatternKind::Digits => &DIGITS_REGEX,
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

pub fn check(field: Field, value: &str, pattern: PatternKind, message: &str) -> Option<Issue> {
    (!pattern.is_match(value)).then(|| Issue::new(field, Check::Pattern { pattern }, message))
}

//! Validation issue types.
//!
//! An [`Issue`] names the field it belongs to, the [`Check`] that failed and
//! the message shown next to the input.

use serde::{Deserialize, Serialize};

use regform_model::Field;

/// Named regular-expression formats used by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    UserName,
    Email,
    Mobile,
    DateOfBirth,
    Digits,
}

/// Character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Symbols accepted by [`CharClass::Symbol`].
    pub const SYMBOLS: &'static str = "@$!%*?&";

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => Self::SYMBOLS.contains(c),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CharClass::Uppercase => "Must contain an uppercase letter",
            CharClass::Lowercase => "Must contain a lowercase letter",
            CharClass::Digit => "Must contain a number",
            CharClass::Symbol => "Must contain a special character",
        }
    }
}

/// The check that produced an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Check {
    /// Value is shorter than the minimum character count.
    MinLength { min: usize, found: usize },
    /// Value is longer than the maximum character count.
    MaxLength { max: usize, found: usize },
    /// Value does not match a required format.
    Pattern { pattern: PatternKind },
    /// Password lacks a required character class.
    Composition { class: CharClass },
    /// Value is not one of the offered options.
    Choice,
    /// A required value is empty.
    Required,
}

/// Broad grouping of checks, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Presence,
    Length,
    Format,
    Composition,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Presence => "Presence",
            Category::Length => "Length",
            Category::Format => "Format",
            Category::Composition => "Composition",
        }
    }
}

impl Check {
    pub fn category(&self) -> Category {
        match self {
            Check::Required => Category::Presence,
            Check::MinLength { .. } | Check::MaxLength { .. } => Category::Length,
            Check::Pattern { .. } | Check::Choice => Category::Format,
            Check::Composition { .. } => Category::Composition,
        }
    }
}

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: Field,
    pub check: Check,
    pub message: String,
}

impl Issue {
    pub fn new(field: Field, check: Check, message: impl Into<String>) -> Self {
        Self {
            field,
            check,
            message: message.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.check.category()
    }
}

//! Declarative validation schema.
//!
//! The schema lists, per field, when the field is checked and which rules
//! apply. Whether a location field is required is decided here and nowhere
//! else: [`Requirement::WhenLocationShown`] fields are skipped unless the
//! [`ValidationContext`] says the location section is visible.

use regform_model::Field;

use crate::issue::PatternKind;

/// When a field takes part in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    WhenLocationShown,
}

/// One rule applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least `min` characters.
    MinChars { min: usize, message: &'static str },
    /// At most `max` characters.
    MaxChars { max: usize, message: &'static str },
    /// Whole value matches the pattern.
    Matches {
        pattern: PatternKind,
        message: &'static str,
    },
    /// Non-empty value.
    NonEmpty { message: &'static str },
    /// Password must hold every character class; each missing class is
    /// reported separately.
    PasswordComposition,
    /// Value must be one of `choices`; `missing` is reported for an empty
    /// value.
    OneOf {
        choices: &'static [&'static str],
        missing: &'static str,
    },
}

/// Rules for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub requirement: Requirement,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub fn applies(&self, ctx: &ValidationContext) -> bool {
        match self.requirement {
            Requirement::Always => true,
            Requirement::WhenLocationShown => ctx.location_shown,
        }
    }
}

/// State of the form that decides which fields are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationContext {
    pub location_shown: bool,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_location(mut self, shown: bool) -> Self {
        self.location_shown = shown;
        self
    }
}

pub const GENDER_CHOICES: &[&str] = &["Male", "Female", "Other"];

const POSTAL_CODE_LENGTH: &str = "Postal code must be exactly 6 characters";

/// The registration form schema, in render order.
pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        field: Field::FirstName,
        requirement: Requirement::Always,
        rules: &[Rule::MinChars {
            min: 2,
            message: "First name is required",
        }],
    },
    FieldSpec {
        field: Field::LastName,
        requirement: Requirement::Always,
        rules: &[Rule::MinChars {
            min: 2,
            message: "Last name is required",
        }],
    },
    FieldSpec {
        field: Field::UserName,
        requirement: Requirement::Always,
        rules: &[
            Rule::MinChars {
                min: 2,
                message: "user name is required",
            },
            Rule::Matches {
                pattern: PatternKind::UserName,
                message: "Username should contain no special characters except '_' and '.'",
            },
        ],
    },
    FieldSpec {
        field: Field::Mobile,
        requirement: Requirement::Always,
        rules: &[Rule::Matches {
            pattern: PatternKind::Mobile,
            message: "Invalid mobile number",
        }],
    },
    FieldSpec {
        field: Field::Email,
        requirement: Requirement::Always,
        rules: &[Rule::Matches {
            pattern: PatternKind::Email,
            message: "Invalid email address",
        }],
    },
    FieldSpec {
        field: Field::Password,
        requirement: Requirement::Always,
        rules: &[
            Rule::MinChars {
                min: 8,
                message: "Password should have at least 8 characters",
            },
            Rule::PasswordComposition,
        ],
    },
    FieldSpec {
        field: Field::DateOfBirth,
        requirement: Requirement::Always,
        rules: &[Rule::Matches {
            pattern: PatternKind::DateOfBirth,
            message: "Invalid Format !!! Date Should be in format YYYY/MM/DD. Month Should be below 12 and Date should be below 31",
        }],
    },
    FieldSpec {
        field: Field::Gender,
        requirement: Requirement::Always,
        rules: &[Rule::OneOf {
            choices: GENDER_CHOICES,
            missing: "Gender is required",
        }],
    },
    FieldSpec {
        field: Field::PermanentAddress,
        requirement: Requirement::Always,
        rules: &[Rule::MinChars {
            min: 5,
            message: "Permanent address is required",
        }],
    },
    FieldSpec {
        field: Field::Country,
        requirement: Requirement::WhenLocationShown,
        rules: &[Rule::NonEmpty {
            message: "Country is required",
        }],
    },
    FieldSpec {
        field: Field::State,
        requirement: Requirement::WhenLocationShown,
        rules: &[Rule::NonEmpty {
            message: "State is required",
        }],
    },
    FieldSpec {
        field: Field::City,
        requirement: Requirement::WhenLocationShown,
        rules: &[Rule::NonEmpty {
            message: "City is required",
        }],
    },
    FieldSpec {
        field: Field::PostalCode,
        requirement: Requirement::WhenLocationShown,
        rules: &[
            Rule::MinChars {
                min: 6,
                message: POSTAL_CODE_LENGTH,
            },
            Rule::MaxChars {
                max: 6,
                message: POSTAL_CODE_LENGTH,
            },
            Rule::Matches {
                pattern: PatternKind::Digits,
                message: "Postal code must contain digits only",
            },
        ],
    },
];

/// Look up the [`FieldSpec`] for a field.
pub fn spec_for(field: Field) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|spec| spec.field == field)
}

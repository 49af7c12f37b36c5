//! Form field identifiers and their display metadata.
//!
//! Every input on the registration form is addressed through [`Field`].
//! Fields are grouped into two sections: the always-visible personal
//! section and the optional location section that the user can toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Region of the form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Always shown and always validated.
    Personal,
    /// Shown only while the location toggle is on.
    Location,
}

/// A single input on the registration form.
///
/// Variant order is the render order of the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    UserName,
    Mobile,
    Email,
    Password,
    DateOfBirth,
    Gender,
    PermanentAddress,
    Country,
    State,
    City,
    PostalCode,
}

impl Field {
    /// All fields in render order.
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::UserName,
        Field::Mobile,
        Field::Email,
        Field::Password,
        Field::DateOfBirth,
        Field::Gender,
        Field::PermanentAddress,
        Field::Country,
        Field::State,
        Field::City,
        Field::PostalCode,
    ];

    /// Fields of the optional location section.
    pub const LOCATION: [Field; 4] = [
        Field::Country,
        Field::State,
        Field::City,
        Field::PostalCode,
    ];

    /// Canonical camelCase key, as used in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::UserName => "userName",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Password => "password",
            Field::DateOfBirth => "dateOfBirth",
            Field::Gender => "gender",
            Field::PermanentAddress => "permanentAddress",
            Field::Country => "country",
            Field::State => "state",
            Field::City => "city",
            Field::PostalCode => "postalCode",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::UserName => "User Name",
            Field::Mobile => "Mobile Number",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::DateOfBirth => "Date of Birth",
            Field::Gender => "Gender",
            Field::PermanentAddress => "Permanent Address",
            Field::Country => "Country",
            Field::State => "State",
            Field::City => "City",
            Field::PostalCode => "Postal Code",
        }
    }

    /// Hint text shown in an empty input, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Password => Some("for eg. Abcd@1234"),
            Field::DateOfBirth => Some("YYYY/MM/DD"),
            Field::PermanentAddress => Some(" eg. A/P.Karad tal-karad dist-satara 415110 "),
            Field::Gender => Some("Select Gender"),
            Field::Country => Some("Select Country"),
            Field::State => Some("Select State"),
            Field::City => Some("Select City"),
            _ => None,
        }
    }

    /// Whether the label carries the required marker.
    ///
    /// The dropdowns of the location section are unmarked even though they
    /// are validated while the section is visible.
    pub fn is_marked_required(&self) -> bool {
        !matches!(self, Field::Country | Field::State | Field::City)
    }

    pub fn section(&self) -> Section {
        match self {
            Field::Country | Field::State | Field::City | Field::PostalCode => Section::Location,
            _ => Section::Personal,
        }
    }

    /// Returns true for inputs that pick from a fixed list of options.
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            Field::Gender | Field::Country | Field::State | Field::City
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    /// Parse a field key (case-insensitive, `_` and `-` ignored).
    ///
    /// Accepts the short aliases `dob` and `pincode` as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "firstname" => Ok(Field::FirstName),
            "lastname" => Ok(Field::LastName),
            "username" => Ok(Field::UserName),
            "mobile" => Ok(Field::Mobile),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "dateofbirth" | "dob" => Ok(Field::DateOfBirth),
            "gender" => Ok(Field::Gender),
            "permanentaddress" => Ok(Field::PermanentAddress),
            "country" => Ok(Field::Country),
            "state" => Ok(Field::State),
            "city" => Ok(Field::City),
            "postalcode" | "pincode" => Ok(Field::PostalCode),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

//! Schema-level validation tests.

use proptest::prelude::*;
use regform_model::{Field, FormValues};
use regform_validate::{
    CharClass, Check, PatternKind, ValidationContext, validate_field, validate_form,
};

fn hidden() -> ValidationContext {
    ValidationContext::new()
}

fn shown() -> ValidationContext {
    ValidationContext::new().with_location(true)
}

fn messages(field: Field, value: &str) -> Vec<String> {
    validate_field(field, value, &hidden())
        .into_iter()
        .map(|issue| issue.message)
        .collect()
}

fn valid_personal() -> FormValues {
    FormValues::new()
        .with(Field::FirstName, "John")
        .with(Field::LastName, "Doe")
        .with(Field::UserName, "john_doe.99")
        .with(Field::Email, "john@example.com")
        .with(Field::Password, "Abcd@123")
        .with(Field::Mobile, "9876543210")
        .with(Field::DateOfBirth, "1990/05/17")
        .with(Field::Gender, "Male")
        .with(Field::PermanentAddress, "A/P Karad, Satara")
}

#[test]
fn test_user_name_rules() {
    assert!(messages(Field::UserName, "john_doe.99").is_empty());
    assert_eq!(
        messages(Field::UserName, "john doe!"),
        vec!["Username should contain no special characters except '_' and '.'"]
    );
    assert_eq!(
        messages(Field::UserName, "j"),
        vec!["user name is required"]
    );
    // Too short and empty: both rules fail together.
    assert_eq!(messages(Field::UserName, "").len(), 2);
    assert_eq!(messages(Field::UserName, &"x".repeat(31)).len(), 1);
}

#[test]
fn test_password_reports_all_composition_failures() {
    assert!(messages(Field::Password, "Abcd@123").is_empty());
    insta::assert_snapshot!(messages(Field::Password, "abcd1234").join("\n"), @r"
    Must contain an uppercase letter
    Must contain a special character
    ");
    let issues = validate_field(Field::Password, "ab", &hidden());
    let checks: Vec<Check> = issues.into_iter().map(|issue| issue.check).collect();
    assert_eq!(
        checks,
        vec![
            Check::MinLength { min: 8, found: 2 },
            Check::Composition {
                class: CharClass::Uppercase
            },
            Check::Composition {
                class: CharClass::Digit
            },
            Check::Composition {
                class: CharClass::Symbol
            },
        ]
    );
}

#[test]
fn test_mobile_and_email() {
    assert!(messages(Field::Mobile, "9876543210").is_empty());
    assert_eq!(messages(Field::Mobile, "98765"), vec!["Invalid mobile number"]);
    assert!(messages(Field::Email, "user@domain.tld").is_empty());
    assert_eq!(
        messages(Field::Email, "user@domain"),
        vec!["Invalid email address"]
    );
}

#[test]
fn test_date_of_birth_is_range_checked_only() {
    insta::assert_snapshot!(messages(Field::DateOfBirth, "2023/13/01").join("\n"), @"Invalid Format !!! Date Should be in format YYYY/MM/DD. Month Should be below 12 and Date should be below 31");
    assert!(messages(Field::DateOfBirth, "2023/02/29").is_empty());
    assert!(messages(Field::DateOfBirth, "2023/02/31").is_empty());
}

#[test]
fn test_gender_is_required() {
    assert_eq!(messages(Field::Gender, ""), vec!["Gender is required"]);
    assert!(messages(Field::Gender, "Female").is_empty());
    assert_eq!(
        validate_field(Field::Gender, "female", &hidden())[0].check,
        Check::Choice
    );
}

#[test]
fn test_location_fields_inactive_while_hidden() {
    for field in Field::LOCATION {
        assert!(validate_field(field, "", &hidden()).is_empty());
        assert!(!validate_field(field, "", &shown()).is_empty());
    }
}

#[test]
fn test_postal_code() {
    let issues = validate_field(Field::PostalCode, "12a45", &shown());
    let checks: Vec<Check> = issues.iter().map(|issue| issue.check.clone()).collect();
    assert_eq!(
        checks,
        vec![
            Check::MinLength { min: 6, found: 5 },
            Check::Pattern {
                pattern: PatternKind::Digits
            },
        ]
    );
    assert!(validate_field(Field::PostalCode, "415110", &shown()).is_empty());
    assert_eq!(
        validate_field(Field::PostalCode, "4151100", &shown())[0].message,
        "Postal code must be exactly 6 characters"
    );
}

#[test]
fn test_form_without_location_section() {
    let report = validate_form(&valid_personal(), &hidden());
    assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
}

#[test]
fn test_form_with_location_section() {
    let report = validate_form(&valid_personal(), &shown());
    let fields: Vec<Field> = report.invalid_fields().into_iter().collect();
    assert_eq!(fields, Field::LOCATION.to_vec());

    let values = valid_personal()
        .with(Field::Country, "India")
        .with(Field::State, "Maharashtra")
        .with(Field::City, "Satara")
        .with(Field::PostalCode, "12a45");
    let report = validate_form(&values, &shown());
    let fields: Vec<Field> = report.invalid_fields().into_iter().collect();
    assert_eq!(fields, vec![Field::PostalCode]);

    let values = values.with(Field::PostalCode, "415001");
    assert!(validate_form(&values, &shown()).is_valid());
}

#[test]
fn test_empty_form_flags_every_personal_field() {
    let report = validate_form(&FormValues::new(), &hidden());
    assert_eq!(report.invalid_fields().len(), 9);
}

#[test]
fn test_report_serializes() {
    let report = validate_form(&FormValues::new().with(Field::Mobile, "1"), &hidden());
    let json = serde_json::to_value(&report).expect("serialize report");
    let first = &json["issues"][0];
    assert_eq!(first["field"], "firstName");
    assert_eq!(first["check"]["kind"], "min-length");
}

proptest! {
    #[test]
    fn prop_short_names_fail(name in "\\PC{0,1}") {
        prop_assert!(!validate_field(Field::FirstName, &name, &hidden()).is_empty());
        prop_assert!(!validate_field(Field::LastName, &name, &hidden()).is_empty());
    }

    #[test]
    fn prop_ten_digits_pass_mobile(mobile in "[0-9]{10}") {
        prop_assert!(validate_field(Field::Mobile, &mobile, &hidden()).is_empty());
    }

    #[test]
    fn prop_day_and_month_ranges(year in 0u32..10000, month in 1u32..=12, day in 1u32..=31) {
        let value = format!("{year:04}/{month:02}/{day:02}");
        prop_assert!(validate_field(Field::DateOfBirth, &value, &hidden()).is_empty());
    }

    #[test]
    fn prop_month_out_of_range_fails(year in 0u32..10000, month in 13u32..100, day in 1u32..=31) {
        let value = format!("{year:04}/{month:02}/{day:02}");
        prop_assert!(!validate_field(Field::DateOfBirth, &value, &hidden()).is_empty());
    }
}

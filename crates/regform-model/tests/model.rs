//! Tests for regform-model types.

use regform_model::{Field, FormValues, Gender, RegistrationData, Section};

#[test]
fn location_fields_are_the_location_section() {
    let location: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| field.section() == Section::Location)
        .collect();
    assert_eq!(location, Field::LOCATION.to_vec());
}

#[test]
fn form_values_deserialize_with_missing_keys() {
    let values: FormValues =
        serde_json::from_str(r#"{"firstName":"Ada","postalCode":"411001"}"#)
            .expect("deserialize values");
    assert_eq!(values.get(Field::FirstName), "Ada");
    assert_eq!(values.get(Field::PostalCode), "411001");
    assert_eq!(values.get(Field::Email), "");
}

#[test]
fn registration_round_trips_through_json() {
    let values = FormValues::new()
        .with(Field::FirstName, "Grace")
        .with(Field::LastName, "Hopper")
        .with(Field::UserName, "ghopper")
        .with(Field::Email, "grace@navy.mil")
        .with(Field::Password, "Cobol#59x")
        .with(Field::Mobile, "1234567890")
        .with(Field::DateOfBirth, "1906/12/09")
        .with(Field::Gender, "Female")
        .with(Field::PermanentAddress, "Arlington, Virginia")
        .with(Field::Country, "USA")
        .with(Field::State, "Texas")
        .with(Field::City, "Austin")
        .with(Field::PostalCode, "733010");
    let data = RegistrationData::from_values(&values, true).expect("build record");
    let json = serde_json::to_string(&data).expect("serialize record");
    let round: RegistrationData = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, data);
    assert_eq!(round.gender, Gender::Female);
}

#[test]
fn placeholders_match_the_form() {
    assert_eq!(Field::Password.placeholder(), Some("for eg. Abcd@1234"));
    assert_eq!(Field::DateOfBirth.placeholder(), Some("YYYY/MM/DD"));
    assert_eq!(Field::FirstName.placeholder(), None);
    assert!(!Field::Country.is_marked_required());
    assert!(Field::PostalCode.is_marked_required());
}

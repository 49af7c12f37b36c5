//! Property tests for the location cascade.

use proptest::prelude::*;

use regform_core::{FormMessage, FormOptions, LocationTable, RegistrationForm, UpdateOutcome};
use regform_model::{Field, RegistrationData};

const COUNTRIES: &[&str] = &["India", "USA", "Mars", ""];
const STATES: &[&str] = &["Maharashtra", "Gujarat", "California", "Texas", "Atlantis"];
const CITIES: &[&str] = &["Mumbai", "Surat", "Austin", "San Diego", "Gotham"];

fn selection() -> impl Strategy<Value = FormMessage> {
    prop_oneof![
        prop::sample::select(COUNTRIES).prop_map(|c| FormMessage::CountrySelected(c.to_string())),
        prop::sample::select(STATES).prop_map(|s| FormMessage::StateSelected(s.to_string())),
        prop::sample::select(CITIES).prop_map(|c| FormMessage::CitySelected(c.to_string())),
        Just(FormMessage::LocationSectionToggled),
    ]
}

proptest! {
    #[test]
    fn selections_stay_within_offered_options(messages in prop::collection::vec(selection(), 0..24)) {
        let table = LocationTable::builtin();
        let mut form = RegistrationForm::new(FormOptions::new().with_location_section(true));
        for message in messages {
            let before = form.state().values.clone();
            let resets_state = matches!(message, FormMessage::CountrySelected(_));
            let outcome = form.update(message);

            let state = form.state();
            let country = state.values.get(Field::Country);
            let selected_state = state.values.get(Field::State);
            let city = state.values.get(Field::City);
            let expected_states = table.states(country);
            let expected_cities = table.cities(country, selected_state);
            prop_assert_eq!(state.location.states(), expected_states.as_slice());
            prop_assert_eq!(state.location.cities(), expected_cities.as_slice());
            prop_assert!(country.is_empty() || table.countries().iter().any(|name| *name == country));
            prop_assert!(selected_state.is_empty() || expected_states.iter().any(|name| *name == selected_state));
            prop_assert!(city.is_empty() || expected_cities.iter().any(|name| *name == city));

            if matches!(outcome, UpdateOutcome::Ignored(_)) {
                prop_assert_eq!(&state.values, &before);
            } else if resets_state {
                prop_assert_eq!(selected_state, "");
                prop_assert_eq!(city, "");
            }
        }
    }

    #[test]
    fn handler_runs_once_per_accepted_submit(submits in 1usize..5) {
        let mut calls = 0usize;
        let handler = |_: &RegistrationData| calls += 1;
        let mut form = RegistrationForm::with_handler(FormOptions::new(), handler);
        let entries = [
            (Field::FirstName, "Priya"),
            (Field::LastName, "Patil"),
            (Field::UserName, "priya"),
            (Field::Mobile, "9876543210"),
            (Field::Email, "priya@example.in"),
            (Field::Password, "Abcd@123"),
            (Field::DateOfBirth, "1998/07/21"),
            (Field::Gender, "Male"),
            (Field::PermanentAddress, "Karad"),
        ];
        for (field, value) in entries {
            form.update(FormMessage::field_changed(field, value));
        }
        for _ in 0..submits {
            form.update(FormMessage::Submit);
        }
        drop(form);
        prop_assert_eq!(calls, submits);
    }
}

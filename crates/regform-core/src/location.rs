//! Static country → state → city lookup and the cascade over it.
//!
//! The table is a plain nested slice so option order is exactly the order
//! written here. [`LocationCascade`] holds the option lists currently on
//! offer and keeps them consistent with the selected country and state.

use tracing::{debug, warn};

use regform_model::{Field, FormValues};

/// A state and its cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEntry {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

/// A country and its states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: &'static str,
    pub states: &'static [StateEntry],
}

const BUILTIN: &[CountryEntry] = &[
    CountryEntry {
        name: "India",
        states: &[
            StateEntry {
                name: "Maharashtra",
                cities: &["Mumbai", "Pune", "Satara"],
            },
            StateEntry {
                name: "Gujarat",
                cities: &["Ahmedabad", "Surat", "Vadodara"],
            },
        ],
    },
    CountryEntry {
        name: "USA",
        states: &[
            StateEntry {
                name: "California",
                cities: &["Los Angeles", "San Francisco", "San Diego"],
            },
            StateEntry {
                name: "Texas",
                cities: &["Houston", "Austin", "Dallas"],
            },
        ],
    },
];

/// Immutable location lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTable {
    countries: &'static [CountryEntry],
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocationTable {
    /// The table shipped with the form.
    pub const fn builtin() -> Self {
        Self { countries: BUILTIN }
    }

    pub fn entries(&self) -> &'static [CountryEntry] {
        self.countries
    }

    pub fn countries(&self) -> Vec<&'static str> {
        self.countries.iter().map(|country| country.name).collect()
    }

    /// States of `country`, empty when the country is unknown.
    pub fn states(&self, country: &str) -> Vec<&'static str> {
        self.country(country)
            .map(|entry| entry.states.iter().map(|state| state.name).collect())
            .unwrap_or_default()
    }

    /// Cities of `state` within `country`, empty when either is unknown.
    pub fn cities(&self, country: &str, state: &str) -> Vec<&'static str> {
        self.country(country)
            .and_then(|entry| entry.states.iter().find(|s| s.name == state))
            .map(|entry| entry.cities.to_vec())
            .unwrap_or_default()
    }

    fn country(&self, name: &str) -> Option<&'static CountryEntry> {
        self.countries.iter().find(|country| country.name == name)
    }
}

/// Option lists currently offered by the state and city selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCascade {
    table: LocationTable,
    states: Vec<&'static str>,
    cities: Vec<&'static str>,
}

impl LocationCascade {
    pub fn new(table: LocationTable) -> Self {
        Self {
            table,
            states: Vec::new(),
            cities: Vec::new(),
        }
    }

    pub fn countries(&self) -> Vec<&'static str> {
        self.table.countries()
    }

    pub fn states(&self) -> &[&'static str] {
        &self.states
    }

    pub fn cities(&self) -> &[&'static str] {
        &self.cities
    }

    /// The state selector accepts input only while it has options.
    pub fn state_enabled(&self) -> bool {
        !self.states.is_empty()
    }

    pub fn city_enabled(&self) -> bool {
        !self.cities.is_empty()
    }

    /// Options for a select field of the location section.
    pub fn options(&self, field: Field) -> Vec<&'static str> {
        match field {
            Field::Country => self.countries(),
            Field::State => self.states.clone(),
            Field::City => self.cities.clone(),
            _ => Vec::new(),
        }
    }

    /// Select a country: offer its states and clear state and city.
    ///
    /// An empty value resets the selector. A country missing from the
    /// table is refused and leaves everything unchanged.
    pub fn select_country(&mut self, values: &mut FormValues, country: &str) -> bool {
        if !country.is_empty() && !self.table.countries().iter().any(|name| *name == country) {
            warn!("refused country outside the table");
            return false;
        }
        values.set(Field::Country, country);
        self.states = self.table.states(country);
        self.cities.clear();
        values.clear(Field::State);
        values.clear(Field::City);
        debug!(state_count = self.states.len(), "country selected");
        true
    }

    /// Select one of the offered states: offer its cities and clear the
    /// city.
    pub fn select_state(&mut self, values: &mut FormValues, state: &str) -> bool {
        if !state.is_empty() && !self.states.iter().any(|name| *name == state) {
            warn!(offered = self.states.len(), "refused state outside the offered list");
            return false;
        }
        values.set(Field::State, state);
        self.cities = self.table.cities(values.get(Field::Country), state);
        values.clear(Field::City);
        debug!(city_count = self.cities.len(), "state selected");
        true
    }

    /// Select one of the offered cities. Nothing downstream depends on it.
    pub fn select_city(&mut self, values: &mut FormValues, city: &str) -> bool {
        if !city.is_empty() && !self.cities.iter().any(|name| *name == city) {
            warn!(offered = self.cities.len(), "refused city outside the offered list");
            return false;
        }
        values.set(Field::City, city);
        debug!("city selected");
        true
    }
}

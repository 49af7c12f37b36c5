//! Registration form widget.
//!
//! The widget follows a message/update design: every user interaction is a
//! [`FormMessage`], applied by [`RegistrationForm::update`] to a
//! [`FormState`]. The modules are:
//!
//! - **location**: static country/state/city table and the cascade over it
//! - **state**: values, per-field errors and visibility of the form
//! - **form**: the update loop and submission handling
//! - **completion**: callbacks receiving validated registrations

pub mod completion;
pub mod form;
pub mod location;
pub mod message;
pub mod options;
pub mod state;

pub use completion::{Acknowledge, CONFIRMATION, CompletionHandler};
pub use form::{RegistrationForm, UpdateOutcome};
pub use location::{CountryEntry, LocationCascade, LocationTable, StateEntry};
pub use message::FormMessage;
pub use options::{FormOptions, ValidationMode};
pub use state::FormState;

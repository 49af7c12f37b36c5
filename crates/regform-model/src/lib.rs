pub mod error;
pub mod field;
pub mod gender;
pub mod registration;
pub mod values;

pub use error::{ModelError, Result};
pub use field::{Field, Section};
pub use gender::Gender;
pub use registration::{LocationDetails, RegistrationData};
pub use values::FormValues;

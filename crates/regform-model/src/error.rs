use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown gender: {0:?} (expected Male, Female or Other)")]
    UnknownGender(String),
    #[error("field {0} has no value")]
    MissingValue(Field),
}

pub type Result<T> = std::result::Result<T, ModelError>;

//! Input validation shared by the domain data conversions.

use std::str::FromStr;

use thiserror::Error;

/// Rejected client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{field}` is not a valid UUID")]
    InvalidUuid { field: &'static str },
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

pub(crate) fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(value)
}

pub(crate) fn identifier<T: FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value
        .parse::<T>()
        .map_err(|_ignored| ValidationError::InvalidUuid { field })
}

/// Query strings send `?name=` for cleared inputs; treat those as absent.
pub(crate) fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

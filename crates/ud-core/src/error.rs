use crate::ValidationErrors;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user draft: {errors} {location}")]
    InvalidDraft {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid form field: {value} {location}")]
    InvalidFormField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field errors carried by a rejected draft, if any.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::InvalidDraft { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

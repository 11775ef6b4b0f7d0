use crate::{CoreError, FormField, Result as CoreErrorResult, validation};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Transient add-user form state.
///
/// Also the flat shape the wizard writes into local storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl UserDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Street => &self.street,
            FormField::City => &self.city,
            FormField::Zip => &self.zip,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Street => self.street = value,
            FormField::City => self.city = value,
            FormField::Zip => self.zip = value,
        }
    }

    /// Validate a group of fields against the form schema.
    ///
    /// Only the named fields are checked; the rest of the draft is ignored.
    #[track_caller]
    pub fn validate(&self, fields: &[FormField]) -> CoreErrorResult<()> {
        let errors = validation::validate_fields(self, fields);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidDraft {
                errors,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

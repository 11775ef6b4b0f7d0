use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The six editable user fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Street,
    City,
    Zip,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Street,
        Self::City,
        Self::Zip,
    ];

    /// Fields collected on the contact step of the wizard
    pub const CONTACT: [FormField; 3] = [Self::Name, Self::Email, Self::Phone];

    /// Fields collected on the address step of the wizard
    pub const ADDRESS: [FormField; 3] = [Self::Street, Self::City, Self::Zip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::City => "city",
            Self::Zip => "zip",
        }
    }

    /// Human label used by forms and detail views
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Street => "Street",
            Self::City => "City",
            Self::Zip => "Zip",
        }
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "street" => Ok(Self::Street),
            "city" => Ok(Self::City),
            "zip" | "zipcode" => Ok(Self::Zip),
            _ => Err(CoreError::InvalidFormField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use ud_client::ClientError;
use ud_core::{CoreError, UserId};
use ud_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Remote directory unavailable: {source} {location}")]
    Remote {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Local storage error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    UserNotFound { id: UserId, location: ErrorLocation },

    #[error("{message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },
}

impl DashboardError {
    #[track_caller]
    pub fn user_not_found(id: UserId) -> Self {
        Self::UserNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The single line a view shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { source, .. } => source.user_message().to_string(),
            Self::Store { source, .. } => source.recovery_hint().to_string(),
            Self::Core { source, .. } => match source.validation_errors() {
                Some(errors) => errors.to_string(),
                None => source.to_string(),
            },
            Self::UserNotFound { id, .. } => format!("User {id} not found"),
            Self::InvalidState { message, .. } => message.clone(),
        }
    }
}

impl From<ClientError> for DashboardError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for DashboardError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DashboardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

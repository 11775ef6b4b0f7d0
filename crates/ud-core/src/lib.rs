pub mod error;
pub mod models;
pub mod search;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::address::Address;
pub use models::form_field::FormField;
pub use models::provenance::Provenance;
pub use models::remote_user::{RemoteAddress, RemoteUser};
pub use models::stored_user::{StoredAddress, StoredUser};
pub use models::theme::Theme;
pub use models::user::{User, UserId};
pub use models::user_draft::UserDraft;
pub use search::{filter_users, matches_query};
pub use validation::ValidationErrors;

/// Ids above this value were minted locally; the remote directory stays below it.
pub const LOCAL_ID_THRESHOLD: UserId = 1000;

/// Shown wherever a record has no value for a field.
pub const PLACEHOLDER: &str = "-";

pub mod address;
pub mod form_field;
pub mod provenance;
pub mod remote_user;
pub mod stored_user;
pub mod theme;
pub mod user;
pub mod user_draft;

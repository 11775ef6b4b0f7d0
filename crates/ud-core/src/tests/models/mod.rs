mod form_field;
mod provenance;
mod remote_user;
mod stored_user;
mod theme;
mod user;

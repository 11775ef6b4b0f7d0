//! Form schema for the add-user draft.

use crate::{FormField, UserDraft};

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("static regex should not panic")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{7,}$").expect("static regex should not panic")
});

/// Per-field validation messages, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Check one field value, returning the message shown inline on failure.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(match field {
            FormField::Name => "Name is required",
            FormField::Email => "Email is required",
            FormField::Phone => "Phone is required",
            FormField::Street => "Street is required",
            FormField::City => "City is required",
            FormField::Zip => "Zip is required",
        });
    }

    match field {
        FormField::Email if !is_valid_email(value) => Some("Invalid email"),
        FormField::Phone if !PHONE_REGEX.is_match(value) => Some("Invalid phone number"),
        _ => None,
    }
}

/// Check the named fields of a draft.
pub fn validate_fields(draft: &UserDraft, fields: &[FormField]) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in fields {
        if let Some(message) = validate_field(*field, draft.field(*field)) {
            errors.insert(*field, message);
        }
    }
    errors
}

fn is_valid_email(value: &str) -> bool {
    // The pattern cannot express these two without look-around.
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

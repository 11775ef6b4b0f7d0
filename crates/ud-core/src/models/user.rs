//! User entity - the canonical record shown by the dashboard.

use crate::{Address, FormField, Provenance, UserDraft};

use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A user record in canonical shape.
///
/// Both remote and local records are normalized into this shape at the
/// store boundary; absent values hold the placeholder `"-"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl User {
    /// Build a record from a completed wizard draft
    pub fn from_draft(id: UserId, draft: &UserDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: Address {
                street: draft.street.clone(),
                city: draft.city.clone(),
                zipcode: draft.zip.clone(),
            },
        }
    }

    pub fn provenance(&self) -> Provenance {
        Provenance::from_id(self.id)
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Street => &self.address.street,
            FormField::City => &self.address.city,
            FormField::Zip => &self.address.zipcode,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Street => self.address.street = value,
            FormField::City => self.address.city = value,
            FormField::Zip => self.address.zipcode = value,
        }
    }
}

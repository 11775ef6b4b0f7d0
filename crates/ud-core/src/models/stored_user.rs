//! Wire shape of locally persisted users.
//!
//! Records written by the wizard are flat (`street`, `city`, `zip`); some
//! carry a nested `address` as well. Loading accepts either, preferring
//! the nested value, and writing keeps both in sync. Unknown keys are
//! carried through untouched.

use crate::{Address, PLACEHOLDER, User, UserId};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<StoredAddress>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl StoredUser {
    /// Overwrite every known field from `user`, keeping unknown keys.
    pub fn apply(&mut self, user: &User) {
        self.id = user.id;
        self.name = user.name.clone();
        self.email = user.email.clone();
        self.phone = Some(user.phone.clone());
        self.street = Some(user.address.street.clone());
        self.city = Some(user.address.city.clone());
        self.zip = Some(user.address.zipcode.clone());
        self.address = Some(StoredAddress {
            street: Some(user.address.street.clone()),
            city: Some(user.address.city.clone()),
            zipcode: Some(user.address.zipcode.clone()),
        });
    }
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        let mut stored = Self {
            id: user.id,
            name: String::new(),
            email: String::new(),
            phone: None,
            street: None,
            city: None,
            zip: None,
            address: None,
            extra: Map::new(),
        };
        stored.apply(user);
        stored
    }
}

impl From<StoredUser> for User {
    fn from(s: StoredUser) -> Self {
        let nested = s.address.unwrap_or_default();
        Self {
            id: s.id,
            name: first_present([Some(s.name)]),
            email: first_present([Some(s.email)]),
            phone: first_present([s.phone]),
            address: Address {
                street: first_present([nested.street, s.street]),
                city: first_present([nested.city, s.city]),
                zipcode: first_present([nested.zipcode, s.zip]),
            },
        }
    }
}

fn first_present<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

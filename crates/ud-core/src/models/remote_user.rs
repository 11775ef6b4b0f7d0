//! Wire shape of the public user directory.

use crate::{Address, PLACEHOLDER, User, UserId};

use serde::Deserialize;

/// A user as returned by the directory endpoint.
///
/// The endpoint sends more (username, website, company, geo); only the
/// fields the dashboard shows are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub address: RemoteAddress,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAddress {
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl From<RemoteUser> for User {
    fn from(r: RemoteUser) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: or_placeholder(r.phone),
            address: Address {
                street: or_placeholder(r.address.street),
                city: r.address.city,
                zipcode: or_placeholder(r.address.zipcode),
            },
        }
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

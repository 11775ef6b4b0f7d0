mod models;

use crate::{Address, User, UserDraft, UserId};

pub(crate) fn user(id: UserId, name: &str, city: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: city.to_string(),
            zipcode: "00001".to_string(),
        },
    }
}

pub(crate) fn jane_draft() -> UserDraft {
    UserDraft {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "+1 555-1234".to_string(),
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        zip: "00001".to_string(),
    }
}

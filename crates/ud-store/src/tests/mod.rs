mod error;

use ud_core::{Address, User, UserId};

pub(crate) const USERS_KEY: &str = "localUsers";
pub(crate) const THEME_KEY: &str = "theme";

pub(crate) fn local_user(id: UserId, name: &str, city: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: "someone@example.com".to_string(),
        phone: "+1 555-1234".to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: city.to_string(),
            zipcode: "00001".to_string(),
        },
    }
}

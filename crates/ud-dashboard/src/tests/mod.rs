mod dashboard_view;

use crate::{Clock, UserDirectory};

use ud_client::{ClientError, ClientResult, FETCH_FAILED_MESSAGE};
use ud_core::{Address, User, UserId};
use ud_store::{KeyValueStorage, LocalRecordStore, MemoryStorage};

use std::sync::Arc;

use async_trait::async_trait;

pub(crate) const USERS_KEY: &str = "localUsers";
pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const NOW: i64 = 1_700_000_000_000;

/// Directory returning a fixed listing or a fixed HTTP status failure.
pub(crate) struct FakeDirectory {
    result: Result<Vec<User>, u16>,
}

impl FakeDirectory {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self { result: Ok(users) }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
        }
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn fetch_users(&self) -> ClientResult<Vec<User>> {
        match &self.result {
            Ok(users) => Ok(users.clone()),
            Err(status) => Err(ClientError::status(*status, FETCH_FAILED_MESSAGE)),
        }
    }
}

pub(crate) struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub(crate) fn user(id: UserId, name: &str, city: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+1 555-1234".to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: city.to_string(),
            zipcode: "00001".to_string(),
        },
    }
}

pub(crate) fn remote_users() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Gwenborough"),
        user(2, "Ervin Howell", "Wisokyburgh"),
    ]
}

pub(crate) fn storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

pub(crate) fn store_with(storage: &Arc<MemoryStorage>, users: &[User]) -> LocalRecordStore {
    let shared: Arc<dyn KeyValueStorage> = storage.clone();
    let store = LocalRecordStore::new(shared, USERS_KEY);
    for u in users {
        store.append(u).unwrap();
    }
    store
}

use crate::{KeyValueStorage, StoreError, StoreResult};

use ud_core::{StoredUser, User, UserId};

use std::sync::Arc;

use log::{debug, info};

/// Locally created users, kept as one JSON array under a single key.
///
/// Every mutation reads the whole array, transforms it and writes it back.
/// Last write wins; there is no locking beyond the single-process model.
#[derive(Clone)]
pub struct LocalRecordStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl LocalRecordStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// All stored users in canonical shape.
    ///
    /// A missing key yields an empty list. Unparseable content yields
    /// `StoreError::Corrupted` rather than being silently discarded.
    pub fn load(&self) -> StoreResult<Vec<User>> {
        Ok(self.read_all()?.into_iter().map(User::from).collect())
    }

    /// Push `user` onto the stored array.
    pub fn append(&self, user: &User) -> StoreResult<()> {
        let mut records = self.read_all()?;
        records.push(StoredUser::from(user));
        self.write_all(&records)?;
        info!("Stored local user {} ({})", user.id, user.name);
        Ok(())
    }

    /// Overwrite the record with `id`, keeping flat and nested address
    /// fields in sync. Returns whether a record was found.
    pub fn replace(&self, id: UserId, user: &User) -> StoreResult<bool> {
        let mut records = self.read_all()?;
        let mut found = false;
        for record in records.iter_mut().filter(|r| r.id == id) {
            record.apply(user);
            found = true;
        }
        self.write_all(&records)?;
        if found {
            info!("Updated local user {id}");
        } else {
            debug!("No local user {id} to update");
        }
        Ok(found)
    }

    /// Drop the record with `id`. Returns whether a record was removed.
    pub fn remove(&self, id: UserId) -> StoreResult<bool> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        self.write_all(&records)?;
        if removed {
            info!("Removed local user {id}");
        } else {
            debug!("No local user {id} to remove");
        }
        Ok(removed)
    }

    /// Highest stored id, if any records exist.
    pub fn max_id(&self) -> StoreResult<Option<UserId>> {
        Ok(self.read_all()?.iter().map(|r| r.id).max())
    }

    /// Forget every local user, including a corrupted array.
    pub fn reset(&self) -> StoreResult<()> {
        self.storage.remove_item(&self.key)?;
        info!("Cleared local users under '{}'", self.key);
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<StoredUser>> {
        match self.storage.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::corrupted(self.key.clone(), e.to_string())),
        }
    }

    fn write_all(&self, records: &[StoredUser]) -> StoreResult<()> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &json)
    }
}

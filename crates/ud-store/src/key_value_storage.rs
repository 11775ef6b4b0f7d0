use crate::StoreResult;

/// String key/value area with the semantics of browser local storage.
pub trait KeyValueStorage: Send + Sync {
    /// Value under `key`, or `None` when the key was never written.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Drop `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

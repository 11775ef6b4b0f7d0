//! Local key/value storage and the two stores built on it.
//!
//! Everything here is synchronous: reads and writes go straight to the
//! backing storage with a full read / transform / full write per call.

pub mod error;
pub mod file_storage;
pub mod key_value_storage;
pub mod local_record_store;
pub mod memory_storage;
pub mod theme_store;

#[cfg(test)]
mod tests;

pub use error::{Result as StoreResult, StoreError};
pub use file_storage::FileStorage;
pub use key_value_storage::KeyValueStorage;
pub use local_record_store::LocalRecordStore;
pub use memory_storage::MemoryStorage;
pub use theme_store::ThemeStore;

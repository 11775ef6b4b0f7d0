use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_THEME_KEY, DEFAULT_USERS_KEY,
};

use serde::Deserialize;

/// Layout of the local key/value storage area.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one file per key, relative to the config dir
    pub dir: String,
    /// Key under which locally created users are kept
    pub users_key: String,
    /// Key under which the theme preference is kept
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            users_key: String::from(DEFAULT_USERS_KEY),
            theme_key: String::from(DEFAULT_THEME_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be a non-empty relative path and cannot contain '..'",
            ));
        }

        for (name, key) in [("users_key", &self.users_key), ("theme_key", &self.theme_key)] {
            if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
                return Err(ConfigError::storage(format!(
                    "storage.{name} must be non-empty, cannot start with '.' \
                     and cannot contain path separators"
                )));
            }
        }

        if self.users_key == self.theme_key {
            return Err(ConfigError::storage(format!(
                "storage.users_key and storage.theme_key must differ, both are '{}'",
                self.users_key
            )));
        }

        Ok(())
    }
}

use crate::{ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_URL};

use serde::Deserialize;

/// Where the remote user directory lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Full URL of the users endpoint (GET, no auth, no paging)
    pub url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DIRECTORY_URL),
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::directory(format!(
                "directory.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        Ok(())
    }
}

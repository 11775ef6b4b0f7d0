use crate::DEFAULT_PREFERS_DARK;

use serde::Deserialize;

/// Ambient presentation signals from the operating environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Environment asks for a dark colour scheme; used when no theme is stored
    pub prefers_dark: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            prefers_dark: DEFAULT_PREFERS_DARK,
        }
    }
}

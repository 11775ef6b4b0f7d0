use crate::{KeyValueStorage, StoreResult};

use ud_core::Theme;

use std::sync::Arc;

use log::debug;

/// Persisted light/dark preference under its own key.
#[derive(Clone)]
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Stored preference, or `None` when nothing (or an empty string) is stored.
    pub fn load(&self) -> StoreResult<Option<Theme>> {
        let stored = self.storage.get_item(&self.key)?;
        let theme = stored
            .filter(|v| !v.is_empty())
            .map(|v| Theme::from_stored(&v));
        debug!("Stored theme under '{}': {:?}", self.key, theme);
        Ok(theme)
    }

    pub fn save(&self, theme: Theme) -> StoreResult<()> {
        self.storage.set_item(&self.key, theme.as_str())
    }
}

use crate::DashboardResult;

use ud_core::Theme;
use ud_store::ThemeStore;

use std::collections::BTreeSet;

use log::info;

/// Classes on the document root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    classes: BTreeSet<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Theme currently presented, as read from the root class.
    pub fn theme(&self) -> Theme {
        if self.has_class(Theme::DARK_CLASS) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn apply(&mut self, theme: Theme) {
        if theme.is_dark() {
            self.add_class(Theme::DARK_CLASS);
        } else {
            self.remove_class(Theme::DARK_CLASS);
        }
    }
}

/// Light/dark preference backed by a [`ThemeStore`].
pub struct ThemePreference {
    store: ThemeStore,
    prefers_dark: bool,
}

impl ThemePreference {
    /// `prefers_dark` is the ambient colour-scheme signal used when
    /// nothing is stored.
    pub fn new(store: ThemeStore, prefers_dark: bool) -> Self {
        Self {
            store,
            prefers_dark,
        }
    }

    /// Resolve the starting theme and apply it to `document`.
    ///
    /// Reads storage but never writes it.
    pub fn initialize(&self, document: &mut Document) -> DashboardResult<Theme> {
        let theme = match self.store.load()? {
            Some(stored) => stored,
            None if self.prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        document.apply(theme);
        Ok(theme)
    }

    /// Flip whatever the document currently shows and persist the result.
    pub fn toggle(&self, document: &mut Document) -> DashboardResult<Theme> {
        let theme = document.theme().toggled();
        document.apply(theme);
        self.store.save(theme)?;
        info!("Theme set to {theme}");
        Ok(theme)
    }
}

use crate::{
    AddUserWizard, Clock, DashboardError, DashboardResult, DashboardView, Document, Notification,
    Route, ThemePreference, UserDirectory,
};

use ud_core::{Theme, User};
use ud_store::{KeyValueStorage, LocalRecordStore, ThemeStore};

use std::sync::Arc;

use log::{debug, warn};

/// Storage keys and ambient signals the application starts from.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub users_key: String,
    pub theme_key: String,
    pub prefers_dark: bool,
}

/// Application state: the current page plus everything that outlives it.
///
/// Persisted values (the theme) are read once in [`App::new`]. Every
/// mutation afterwards writes through to storage immediately.
pub struct App<D> {
    directory: D,
    clock: Box<dyn Clock>,
    store: LocalRecordStore,
    theme: ThemePreference,
    document: Document,
    route: Route,
    dashboard: DashboardView,
    wizard: Option<AddUserWizard>,
}

impl<D: UserDirectory> App<D> {
    pub fn new(
        directory: D,
        clock: Box<dyn Clock>,
        storage: Arc<dyn KeyValueStorage>,
        settings: &AppSettings,
    ) -> DashboardResult<Self> {
        let store = LocalRecordStore::new(storage.clone(), settings.users_key.as_str());
        let theme = ThemePreference::new(
            ThemeStore::new(storage, settings.theme_key.as_str()),
            settings.prefers_dark,
        );

        let mut document = Document::new();
        let initial = theme.initialize(&mut document)?;
        debug!("Starting with {initial} theme");

        Ok(Self {
            directory,
            clock,
            dashboard: DashboardView::new(store.clone()),
            store,
            theme,
            document,
            route: Route::Landing,
            wizard: None,
        })
    }

    /// Show the page at `path`.
    ///
    /// Entering the dashboard builds a fresh view and loads it; entering
    /// the add page starts an empty wizard. Leaving the add page drops the
    /// draft.
    pub async fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::parse(path);
        debug!("Navigating to {route}");
        self.wizard = None;

        match &route {
            Route::Dashboard => {
                self.dashboard = DashboardView::new(self.store.clone());
                self.dashboard.mount(&self.directory).await;
            }
            Route::AddUser => self.wizard = Some(AddUserWizard::new()),
            Route::Landing => {}
            Route::NotFound(path) => warn!("No page at {path}"),
        }

        self.route = route;
        &self.route
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> Theme {
        self.document.theme()
    }

    pub fn toggle_theme(&mut self) -> DashboardResult<Theme> {
        self.theme.toggle(&mut self.document)
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardView {
        &mut self.dashboard
    }

    pub fn wizard(&self) -> Option<&AddUserWizard> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut AddUserWizard> {
        self.wizard.as_mut()
    }

    /// Confirm the wizard: store the new user and return to the dashboard.
    pub async fn submit_wizard(&mut self) -> DashboardResult<User> {
        let last_local_id = self.store.max_id()?;
        let wizard = self
            .wizard
            .as_mut()
            .ok_or_else(|| DashboardError::invalid_state("The add user page is not open"))?;
        let user = wizard.submit(self.clock.as_ref(), last_local_id)?;

        self.dashboard.repository_mut().create(user.clone())?;
        self.navigate(Route::Dashboard.path()).await;
        self.dashboard
            .notify(Notification::success("User added successfully!"));
        Ok(user)
    }

    /// "Back to Dashboard" from the add page; the draft is discarded.
    pub async fn leave_wizard(&mut self) {
        self.navigate(Route::Dashboard.path()).await;
    }

    /// Forget every locally created user.
    pub fn reset_local_users(&mut self) -> DashboardResult<()> {
        self.store.reset()?;
        Ok(())
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.dashboard.take_notifications()
    }
}

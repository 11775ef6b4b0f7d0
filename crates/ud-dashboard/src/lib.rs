//! Application state for the user dashboard.
//!
//! Pages are explicit state objects driven by a front end:
//! [`DashboardView`] for the list, [`AddUserWizard`] for the add flow and
//! [`ThemePreference`] for the light/dark class on the [`Document`].
//! [`App`] owns them all and performs navigation between [`Route`]s.

pub mod app;
pub mod clock;
pub mod dashboard_view;
pub mod directory;
pub mod error;
pub mod modal;
pub mod notification;
pub mod repository;
pub mod route;
pub mod theme_preference;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use app::{App, AppSettings};
pub use clock::{Clock, SystemClock};
pub use dashboard_view::{DashboardView, LOADING_MESSAGE, NO_USERS_MESSAGE, ViewState};
pub use directory::UserDirectory;
pub use error::{DashboardError, Result as DashboardResult};
pub use modal::{DeleteConfirmation, DetailModal};
pub use notification::{Notification, NotificationKind};
pub use repository::{UserEntry, UserRepository};
pub use route::{LANDING_LINK, LANDING_TAGLINE, LANDING_TITLE, Route};
pub use theme_preference::{Document, ThemePreference};
pub use wizard::{AddUserWizard, WizardStep};

use crate::{CliResult, Commands, StorageCommands, ThemeCommands};

use ud_core::{FormField, Provenance, Theme, User, ValidationErrors};
use ud_dashboard::{
    App, DashboardError, DashboardView, Notification, Route, UserDirectory, ViewState, WizardStep,
};

use log::debug;

/// What a command leaves on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Landing,
    Users { search: String, users: Vec<User> },
    LoadFailed(String),
    Detail {
        title: String,
        rows: Vec<(&'static str, String)>,
    },
    AddForm { step: WizardStep },
    Invalid { step: WizardStep, errors: ValidationErrors },
    Added(User),
    Updated { user: User, provenance: Provenance },
    Deleted(User),
    DeleteCancelled(User),
    Theme(Theme),
    StorageCleared,
    NotFound(String),
}

/// A rendered page plus the notifications raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub view: View,
    pub notifications: Vec<Notification>,
    pub theme: Theme,
}

impl Screen {
    /// Whether the process should exit non-zero.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.view,
            View::LoadFailed(_) | View::Invalid { .. } | View::NotFound(_)
        )
    }
}

/// Run one command against a freshly initialized `app`.
///
/// `confirm` is asked before a delete unless `--yes` was given.
pub async fn run<D, F>(app: &mut App<D>, command: Option<Commands>, confirm: F) -> CliResult<Screen>
where
    D: UserDirectory,
    F: FnOnce(&str) -> CliResult<bool>,
{
    let view = match command {
        None => open(app, Route::Landing.path()).await,
        Some(Commands::Open { path }) => open(app, &path).await,
        Some(Commands::List { search }) => {
            app.navigate(Route::Dashboard.path()).await;
            let dashboard = app.dashboard_mut();
            if let Some(query) = search {
                dashboard.set_search(query);
            }
            users_view(dashboard)
        }
        Some(Commands::Show { id }) => {
            match loaded_dashboard(app).await {
                Err(view) => view,
                Ok(dashboard) => {
                    dashboard.select(id)?;
                    let detail = dashboard.detail();
                    View::Detail {
                        title: detail.title().unwrap_or_default().to_string(),
                        rows: detail
                            .rows()
                            .into_iter()
                            .map(|(label, value)| (label, value.to_string()))
                            .collect(),
                    }
                }
            }
        }
        Some(Commands::Add {
            name,
            email,
            phone,
            street,
            city,
            zip,
        }) => {
            app.navigate(Route::AddUser.path()).await;
            let values = [
                (FormField::Name, name),
                (FormField::Email, email),
                (FormField::Phone, phone),
                (FormField::Street, street),
                (FormField::City, city),
                (FormField::Zip, zip),
            ];
            add_user(app, values).await?
        }
        Some(Commands::Edit {
            id,
            name,
            email,
            phone,
            street,
            city,
            zip,
        }) => match loaded_dashboard(app).await {
            Err(view) => view,
            Ok(dashboard) => {
                dashboard.begin_edit(id)?;
                let changes = [
                    (FormField::Name, name),
                    (FormField::Email, email),
                    (FormField::Phone, phone),
                    (FormField::Street, street),
                    (FormField::City, city),
                    (FormField::Zip, zip),
                ];
                for (field, value) in changes {
                    if let Some(value) = value {
                        dashboard.edit_field(field, value)?;
                    }
                }
                let provenance = dashboard.save_edit()?;
                let user = dashboard
                    .repository()
                    .get(id)
                    .map(|e| e.user.clone())
                    .ok_or_else(|| DashboardError::user_not_found(id))?;
                View::Updated { user, provenance }
            }
        },
        Some(Commands::Delete { id, yes }) => match loaded_dashboard(app).await {
            Err(view) => view,
            Ok(dashboard) => {
                dashboard.request_delete(id)?;
                let confirmed = match dashboard.delete_confirmation().message() {
                    Some(_) if yes => true,
                    Some(message) => confirm(&message)?,
                    None => false,
                };
                if confirmed {
                    View::Deleted(dashboard.confirm_delete()?)
                } else {
                    let pending = dashboard.delete_confirmation().pending().cloned();
                    dashboard.cancel_delete();
                    match pending {
                        Some(user) => View::DeleteCancelled(user),
                        None => users_view(dashboard),
                    }
                }
            }
        },
        Some(Commands::Theme { action }) => match action.unwrap_or(ThemeCommands::Show) {
            ThemeCommands::Show => View::Theme(app.theme()),
            ThemeCommands::Toggle => View::Theme(app.toggle_theme()?),
        },
        Some(Commands::Storage {
            action: StorageCommands::Reset,
        }) => {
            app.reset_local_users()?;
            View::StorageCleared
        }
    };

    debug!("Rendering {view:?}");
    Ok(Screen {
        view,
        notifications: app.take_notifications(),
        theme: app.theme(),
    })
}

async fn open<D: UserDirectory>(app: &mut App<D>, path: &str) -> View {
    let route = app.navigate(path).await.clone();
    match route {
        Route::Landing => View::Landing,
        Route::Dashboard => users_view(app.dashboard()),
        Route::AddUser => View::AddForm {
            step: app.wizard().map(|w| w.step()).unwrap_or_default(),
        },
        Route::NotFound(path) => View::NotFound(path),
    }
}

/// Navigate to the dashboard; a failed load comes back as the view to show.
async fn loaded_dashboard<D: UserDirectory>(app: &mut App<D>) -> Result<&mut DashboardView, View> {
    app.navigate(Route::Dashboard.path()).await;
    if let ViewState::Error(message) = app.dashboard().state() {
        return Err(View::LoadFailed(message.clone()));
    }
    Ok(app.dashboard_mut())
}

fn users_view(dashboard: &DashboardView) -> View {
    match dashboard.state() {
        ViewState::Error(message) => View::LoadFailed(message.clone()),
        _ => View::Users {
            search: dashboard.search().to_string(),
            users: dashboard.filtered().to_vec(),
        },
    }
}

async fn add_user<D: UserDirectory>(
    app: &mut App<D>,
    values: [(FormField, String); 6],
) -> CliResult<View> {
    let Some(wizard) = app.wizard_mut() else {
        return Err(DashboardError::invalid_state("The add user page is not open").into());
    };

    for (field, value) in values {
        wizard.set_field(field, value);
    }
    // Contact, then address.
    if !(wizard.next() && wizard.next()) {
        return Ok(View::Invalid {
            step: wizard.step(),
            errors: wizard.errors().clone(),
        });
    }

    Ok(View::Added(app.submit_wizard().await?))
}

use crate::{CliResult, Screen, View};

use ud_core::{FormField, PLACEHOLDER, User};
use ud_dashboard::{LANDING_LINK, LANDING_TAGLINE, LANDING_TITLE, NO_USERS_MESSAGE, WizardStep};

use serde_json::{Value, json};

pub const DASHBOARD_TITLE: &str = "User Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json { pretty: bool },
}

impl OutputFormat {
    pub fn from_flags(json: bool, pretty: bool) -> Self {
        if json || pretty {
            Self::Json { pretty }
        } else {
            Self::Text
        }
    }
}

pub fn render(screen: &Screen, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(screen)),
        OutputFormat::Json { pretty } => {
            let value = to_json(screen);
            let out = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            Ok(out)
        }
    }
}

pub fn render_text(screen: &Screen) -> String {
    let mut lines: Vec<String> = screen
        .notifications
        .iter()
        .map(|n| n.message.clone())
        .collect();

    match &screen.view {
        View::Landing => {
            lines.push(LANDING_TITLE.to_string());
            lines.push(LANDING_TAGLINE.to_string());
            lines.push(String::new());
            lines.push(format!("{LANDING_LINK}: ud list"));
        }
        View::Users { search, users } => {
            lines.push(DASHBOARD_TITLE.to_string());
            if !search.is_empty() {
                lines.push(format!("Search: {search}"));
            }
            lines.push(String::new());
            lines.extend(user_table(users));
        }
        View::LoadFailed(message) => lines.push(message.clone()),
        View::Detail { title, rows } => {
            lines.push(title.clone());
            lines.extend(label_lines(
                rows.iter().map(|(label, value)| (*label, value.as_str())),
            ));
        }
        View::AddForm { step } => {
            lines.push("Add User".to_string());
            lines.push(format!("Step {} of 3", step.number()));
            lines.extend(
                step.fields()
                    .iter()
                    .map(|field| format!("  {}:", field.label())),
            );
        }
        View::Invalid { step, errors } => {
            lines.push(format!("Step {} of 3 is incomplete:", step.number()));
            lines.extend(
                errors
                    .iter()
                    .map(|(field, message)| format!("  {}: {message}", field.label())),
            );
        }
        View::Added(user) => {
            lines.push(format!("Added user {}", user.id));
            lines.extend(user_details(user));
        }
        View::Updated { user, provenance } => {
            lines.push(format!("Updated user {} ({provenance})", user.id));
            lines.extend(user_details(user));
        }
        View::Deleted(user) => lines.push(format!("Deleted user {} ({})", user.id, user.name)),
        View::DeleteCancelled(user) => {
            lines.push(format!("Kept user {} ({})", user.id, user.name))
        }
        View::Theme(theme) => lines.push(format!("Theme: {theme}")),
        View::StorageCleared => lines.push("Local users cleared".to_string()),
        View::NotFound(path) => lines.push(format!("No page at {path}")),
    }

    lines.join("\n")
}

/// Name/Email/Phone/City table with an id column for follow-up commands.
pub fn user_table(users: &[User]) -> Vec<String> {
    if users.is_empty() {
        return vec![NO_USERS_MESSAGE.to_string()];
    }

    let header = ["ID", "Name", "Email", "Phone", "City"];
    let rows: Vec<[String; 5]> = users
        .iter()
        .map(|u| {
            [
                u.id.to_string(),
                cell(&u.name),
                cell(&u.email),
                cell(&u.phone),
                cell(&u.address.city),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let format_row = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(header)];
    lines.extend(rows.iter().map(|row| format_row(row.each_ref().map(String::as_str))));
    lines
}

fn user_details(user: &User) -> Vec<String> {
    label_lines(
        FormField::ALL
            .into_iter()
            .map(|field| (field.label(), user.field(field))),
    )
}

fn label_lines<'a>(rows: impl Iterator<Item = (&'static str, &'a str)>) -> Vec<String> {
    rows.map(|(label, value)| format!("  {label}: {}", cell(value)))
        .collect()
}

fn cell(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn to_json(screen: &Screen) -> Value {
    let view = match &screen.view {
        View::Landing => json!({
            "page": "landing",
            "title": LANDING_TITLE,
            "tagline": LANDING_TAGLINE,
            "link": "/dashboard",
        }),
        View::Users { search, users } => json!({
            "page": "dashboard",
            "search": search,
            "users": users,
        }),
        View::LoadFailed(message) => json!({ "page": "dashboard", "error": message }),
        View::Detail { title, rows } => {
            let fields: serde_json::Map<String, Value> = rows
                .iter()
                .map(|(label, value)| (label.to_lowercase(), Value::from(value.as_str())))
                .collect();
            json!({ "page": "detail", "title": title, "fields": fields })
        }
        View::AddForm { step } => json!({
            "page": "add",
            "step": step.number(),
            "fields": step_fields(*step),
        }),
        View::Invalid { step, errors } => {
            let errors: serde_json::Map<String, Value> = errors
                .iter()
                .map(|(field, message)| (field.as_str().to_string(), Value::from(message)))
                .collect();
            json!({ "page": "add", "step": step.number(), "errors": errors })
        }
        View::Added(user) => json!({ "added": user }),
        View::Updated { user, provenance } => json!({ "updated": user, "provenance": provenance }),
        View::Deleted(user) => json!({ "deleted": user }),
        View::DeleteCancelled(user) => json!({ "kept": user }),
        View::Theme(theme) => json!({ "theme": theme }),
        View::StorageCleared => json!({ "cleared": true }),
        View::NotFound(path) => json!({ "error": "not found", "path": path }),
    };

    json!({
        "view": view,
        "notifications": screen.notifications,
        "theme": screen.theme,
    })
}

fn step_fields(step: WizardStep) -> Vec<&'static str> {
    step.fields().iter().map(FormField::as_str).collect()
}

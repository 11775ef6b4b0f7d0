use crate::{StorageCommands, ThemeCommands};

use ud_core::UserId;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List users, optionally filtered by name or city
    List {
        /// Case-insensitive search text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Show one user's details
    Show {
        /// User ID
        id: UserId,
    },

    /// Add a user through the three-step form
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        zip: String,
    },

    /// Edit a user; only the given fields change
    Edit {
        /// User ID
        id: UserId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        zip: Option<String>,
    },

    /// Delete a user after confirmation
    Delete {
        /// User ID
        id: UserId,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Show or toggle the light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Local storage maintenance
    Storage {
        #[command(subcommand)]
        action: StorageCommands,
    },

    /// Navigate to a page by path (/, /dashboard, /dashboard/add)
    Open { path: String },
}

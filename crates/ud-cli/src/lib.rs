//! ud-cli library
//!
//! Command parsing, the command runner and text/JSON rendering behind the
//! `ud` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod runner;
pub mod storage_commands;
pub mod theme_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use render::{OutputFormat, render};
pub use runner::{Screen, View, run};
pub use storage_commands::StorageCommands;
pub use theme_commands::ThemeCommands;

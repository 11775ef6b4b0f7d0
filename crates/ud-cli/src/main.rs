//! ud - user management dashboard
//!
//! Every invocation is one page load: configuration and the stored theme
//! are read at startup, the directory is fetched when a dashboard command
//! runs, and local changes are written through before exit.
//!
//! # Examples
//!
//! ```bash
//! # Dashboard table filtered by city
//! ud list --search spring
//!
//! # Add a user
//! ud add --name "Jane Doe" --email jane@x.com --phone "+1 555-1234" \
//!        --street "1 Main St" --city Springfield --zip 00001
//!
//! # Delete without prompting, JSON output
//! ud delete 1700000000000 --yes --json
//! ```

use ud_cli::{Cli, CliResult, OutputFormat, logger, render, run};
use ud_client::Client;
use ud_config::Config;
use ud_dashboard::{App, AppSettings, SystemClock};
use ud_store::{FileStorage, KeyValueStorage};

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config_dir = Config::config_dir()?;
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_in(&config_dir),
        config.logging.colored,
    )?;
    config.log_summary();

    let storage: Arc<dyn KeyValueStorage> =
        Arc::new(FileStorage::new(config.storage_dir_in(&config_dir)));
    let settings = AppSettings {
        users_key: config.storage.users_key.clone(),
        theme_key: config.storage.theme_key.clone(),
        prefers_dark: config.appearance.prefers_dark,
    };
    let mut app = App::new(
        Client::new(&config.directory.url),
        Box::new(SystemClock),
        storage,
        &settings,
    )?;

    let format = OutputFormat::from_flags(cli.json, cli.pretty);
    let screen = run(&mut app, cli.command, prompt).await?;
    println!("{}", render(&screen, format)?);

    Ok(if screen.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Ask on stderr, read y/N from stdin.
fn prompt(message: &str) -> CliResult<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{message} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

use crate::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ud")]
#[command(about = "User management dashboard")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Page to show; the landing page when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,
}

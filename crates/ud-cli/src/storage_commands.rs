use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCommands {
    /// Delete every locally added user
    Reset,
}

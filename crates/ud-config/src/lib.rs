mod appearance_config;
mod config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use appearance_config::AppearanceConfig;
pub use config::Config;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".ud";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_USERS_KEY: &str = "localUsers";
const DEFAULT_THEME_KEY: &str = "theme";
const DEFAULT_PREFERS_DARK: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

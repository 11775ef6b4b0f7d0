
use std::env;

use tempfile::TempDir;

/// Environment variables the loader reads; cleared for every test.
const OVERRIDE_VARS: [&str; 8] = [
    "UD_DIRECTORY_URL",
    "UD_STORAGE_DIR",
    "UD_STORAGE_USERS_KEY",
    "UD_STORAGE_THEME_KEY",
    "UD_PREFERS_DARK",
    "UD_LOG_LEVEL",
    "UD_LOG_COLORED",
    "UD_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with UD_CONFIG_DIR pointing at it and no stray overrides.
pub(crate) struct ConfigDirFixture {
    pub(crate) temp: TempDir,
    _dir_guard: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> ConfigDirFixture {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("UD_CONFIG_DIR", temp.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();
    ConfigDirFixture {
        temp,
        _dir_guard: dir_guard,
        _cleared: cleared,
    }
}

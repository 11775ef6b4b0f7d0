use crate::{KeyValueStorage, StoreError, StoreResult};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::debug;

/// Local storage backed by a directory, one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            debug!("Storage key '{key}' not present at {path:?}");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;
        debug!("Read {} bytes from storage key '{key}'", contents.len());
        Ok(Some(contents))
    }

    /// Writes to a temp file, syncs it, then renames over the final path so a
    /// crash mid-write never leaves a truncated value behind.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path_for(key);
        let temp_path = self
            .dir
            .join(format!("{key}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {} bytes to storage key '{key}'", value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StoreError::file_write(path.clone(), e))?;
            debug!("Removed storage key '{key}'");
        }
        Ok(())
    }
}

//! File-backed key-value store
//!
//! Each key is a `<key>.json` file in one directory, written whole on every
//! `set`. Writes go to a temporary sibling first and are renamed into place,
//! so a crash mid-write leaves the previous blob intact.

use std::path::PathBuf;

use crate::domain::{AppError, AppResult};
use crate::ports::KeyValueStore;

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (and create if needed) the store directory
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::Storage(format!("Failed to create store dir {}: {e}", dir.display()))
        })?;
        log::info!("JSON store at {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let key = sanitize_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Reject keys that could escape the store directory.
/// Only alphanumerics, hyphens and underscores are allowed.
fn sanitize_key(key: &str) -> AppResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(AppError::Storage("Store key cannot be empty".to_string()));
    }
    if trimmed.contains("..") || trimmed.contains('/') || trimmed.contains('\\') {
        return Err(AppError::Storage(format!("Invalid store key '{key}'")));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::Storage(format!(
            "Store key '{key}' contains invalid characters"
        )));
    }
    Ok(trimmed)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!("Failed to read '{key}': {e}"))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| AppError::Storage(format!("Failed to write '{key}': {e}")))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| AppError::Storage(format!("Failed to replace '{key}': {e}")))?;
        log::debug!("Stored '{key}' ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to delete '{key}': {e}"))),
        }
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = std::fs::read_dir(&self.dir)
            .map_err(|e| AppError::Storage(format!("Failed to read store dir: {e}")))?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.extension()?.to_str()? == "json" {
                    path.file_stem()?.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();
        keys.sort();
        Ok(keys)
    }
}

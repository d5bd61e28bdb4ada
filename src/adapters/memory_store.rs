//! In-memory store for development and testing without touching disk.
//!
//! Activate in the desktop app by setting PRINTQUOTE_MEMORY_STORE=1:
//!
//!   PRINTQUOTE_MEMORY_STORE=1 RUST_LOG=printquote_lib=debug npm run tauri dev
//!
//! Everything is lost on exit.

use std::collections::BTreeMap;

use crate::domain::AppResult;
use crate::ports::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        log::info!("[MEMORY STORE] Initialized, nothing will be persisted");
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        log::debug!("[MEMORY STORE] SET {key} ({} bytes)", value.len());
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        log::debug!("[MEMORY STORE] REMOVE {key}");
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

//! Key-value persistence port
//!
//! Values are JSON strings. The store is not transactional: a `set`
//! replaces the whole blob for that key.

use crate::domain::AppResult;

/// A local key-value store.
/// Only requires `Send` (not `Sync`): always accessed behind a Mutex.
pub trait KeyValueStore: Send {
    /// Read the blob stored under `key`, `None` if never written
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write (or replace) the blob under `key`
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// All keys currently stored, sorted
    fn keys(&self) -> AppResult<Vec<String>>;
}

//! Tauri command handlers
//!
//! Each command delegates to `AppState` and maps `AppError` to `String`
//! for Tauri IPC. Imports are the exception: their errors keep the
//! detected slicer so the frontend can say which tool the file came from.

pub mod calculation;
pub mod catalog;
pub mod import;
pub mod offers;
pub mod settings;

use crate::domain::AppResult;

/// Stringify the error for the frontend, logging it on the way out
fn to_ipc<T>(result: AppResult<T>) -> Result<T, String> {
    result.map_err(|e| {
        log::warn!("Command failed: {e}");
        e.to_string()
    })
}

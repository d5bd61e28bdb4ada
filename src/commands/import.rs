//! Slicer import command
//!
//! The frontend picks the file; this command reads it and hands the text to
//! the parser. Bytes are decoded lossily so a binary `.3mf` still reaches
//! the parser and gets its dedicated error instead of a UTF-8 failure.

use serde::Serialize;

use crate::domain::{SlicerJobData, SlicerKind, SlicerParseError};
use crate::import;

/// Error payload for a failed import
#[derive(Debug, Clone, Serialize)]
pub struct ImportFailure {
    pub message: String,
    pub slicer: SlicerKind,
}

impl From<SlicerParseError> for ImportFailure {
    fn from(e: SlicerParseError) -> Self {
        Self {
            message: e.to_string(),
            slicer: e.slicer,
        }
    }
}

fn read_and_parse(path: &str) -> Result<SlicerJobData, ImportFailure> {
    let bytes = std::fs::read(path).map_err(|e| {
        log::warn!("Failed to read '{path}': {e}");
        ImportFailure {
            message: format!("Failed to read '{path}': {e}"),
            slicer: SlicerKind::Unknown,
        }
    })?;
    let content = String::from_utf8_lossy(&bytes);
    import::parse_slicer_file(path, &content).map_err(ImportFailure::from)
}

/// Reads and parses on the blocking pool; G-code files can be hundreds of MB
#[tauri::command]
pub async fn import_slicer_file(path: String) -> Result<SlicerJobData, ImportFailure> {
    tauri::async_runtime::spawn_blocking(move || read_and_parse(&path))
        .await
        .map_err(|e| ImportFailure {
            message: format!("Import task failed: {e}"),
            slicer: SlicerKind::Unknown,
        })?
}

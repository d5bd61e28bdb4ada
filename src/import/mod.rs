//! Slicer file import.
//!
//! This module separates the concerns of reading a slicer's output:
//! - `detect`: which slicer wrote the file, and whether it is G-code
//! - `gcode` / `json`: single-pass field extraction per format
//! - `fields`: the shared accumulator and the missing-field warnings
//! - `values`: number, list and duration parsing
//!
//! Everything here is pure. The caller reads the file; `parse_slicer_file`
//! only sees its path and text.

pub mod detect;
pub mod fields;
pub mod gcode;
pub mod json;
pub mod values;

pub use detect::{detect_slicer, Detection};

use crate::domain::{ParseErrorKind, SlicerJobData, SlicerParseError};

/// Identify the slicer and extract job metadata.
///
/// Fails only for structural problems: empty content, a `.3mf` archive,
/// malformed JSON, or a file that is neither G-code nor JSON. Missing fields
/// are reported in `SlicerJobData::warnings` instead.
pub fn parse_slicer_file(file_path: &str, content: &str) -> Result<SlicerJobData, SlicerParseError> {
    let content = content.trim_start_matches('\u{feff}');
    let Detection { slicer, reason } = detect_slicer(file_path, content);
    log::debug!("'{file_path}': slicer {slicer} ({reason})");

    let fail = |kind: ParseErrorKind| {
        log::warn!("Import of '{file_path}' failed: {kind}");
        SlicerParseError::new(kind, slicer)
    };

    if content.trim().is_empty() {
        return Err(fail(ParseErrorKind::Empty));
    }

    let ext = detect::extension(file_path);
    let job = match ext.as_str() {
        "3mf" => return Err(fail(ParseErrorKind::Unsupported3mf)),
        "json" => json::extract(file_path, content, slicer, vec![reason])?,
        _ => match detect::gcode_reason(&ext, content) {
            Some(format_reason) => {
                gcode::extract(file_path, content, slicer, vec![reason, format_reason])
            }
            None => {
                let shown = if ext.is_empty() {
                    "(no extension)".to_string()
                } else {
                    format!(".{ext}")
                };
                return Err(fail(ParseErrorKind::UnsupportedFormat(shown)));
            }
        },
    };

    log::info!(
        "Imported '{file_path}' from {}: time={:?}s filament={:?}g, {} warning(s)",
        job.slicer,
        job.print_time_seconds,
        job.filament_used_g,
        job.warnings.len()
    );
    Ok(job)
}

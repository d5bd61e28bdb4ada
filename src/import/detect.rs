//! Slicer and format detection
//!
//! Detection never fails. It picks the slicer whose marker appears first in
//! the precedence list, so a Prusa header that mentions Cura is still Prusa.

use std::path::Path;

use crate::domain::SlicerKind;

/// Case-sensitive content markers, in precedence order
const CONTENT_MARKERS: &[(&str, SlicerKind)] = &[
    ("PrusaSlicer", SlicerKind::PrusaSlicer),
    ("Cura_SteamEngine", SlicerKind::Cura),
    ("OrcaSlicer", SlicerKind::OrcaSlicer),
    ("QIDIStudio", SlicerKind::QidiStudio),
];

/// Lowercase file name markers, same precedence
const FILENAME_MARKERS: &[(&str, SlicerKind)] = &[
    ("prusa", SlicerKind::PrusaSlicer),
    ("cura", SlicerKind::Cura),
    ("orca", SlicerKind::OrcaSlicer),
    ("qidi", SlicerKind::QidiStudio),
];

/// Extensions that are always read as G-code
pub const GCODE_EXTENSIONS: &[&str] = &["gcode", "gco", "g"];

/// Extensions (and the empty one) read as G-code when the content looks like it
pub const TEXT_EXTENSIONS: &[&str] = &["txt", ""];

/// Commands whose presence marks G-code without a comment header
const GCODE_TOKENS: &[&str] = &["G0 ", "G1 ", "G28", "M104", "M109", "M140", "M190"];

/// Detected slicer plus the reason, for `RawDetection`
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub slicer: SlicerKind,
    pub reason: String,
}

pub fn detect_slicer(file_path: &str, content: &str) -> Detection {
    if let Some((marker, slicer)) = CONTENT_MARKERS
        .iter()
        .find(|(marker, _)| content.contains(marker))
    {
        return Detection {
            slicer: *slicer,
            reason: format!("content contains '{marker}'"),
        };
    }

    let name = file_name(file_path).to_lowercase();
    if let Some((marker, slicer)) = FILENAME_MARKERS
        .iter()
        .find(|(marker, _)| name.contains(marker))
    {
        return Detection {
            slicer: *slicer,
            reason: format!("file name contains '{marker}'"),
        };
    }

    Detection {
        slicer: SlicerKind::Unknown,
        reason: "no slicer marker in content or file name".to_string(),
    }
}

/// Lowercase extension without the dot, empty when there is none
pub fn extension(file_path: &str) -> String {
    Path::new(file_name(file_path))
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Last path component. Both separators count, whatever the host OS.
fn file_name(file_path: &str) -> &str {
    file_path.rsplit(['/', '\\']).next().unwrap_or(file_path)
}

/// Why `content` should be read as G-code, or `None` if it shouldn't
pub fn gcode_reason(ext: &str, content: &str) -> Option<String> {
    if GCODE_EXTENSIONS.contains(&ext) {
        return Some(format!("'.{ext}' extension"));
    }
    if !TEXT_EXTENSIONS.contains(&ext) {
        return None;
    }
    if content.trim_start().starts_with(';') {
        return Some("content starts with a ';' comment".to_string());
    }
    GCODE_TOKENS
        .iter()
        .find(|token| content.contains(*token))
        .map(|token| format!("content contains G-code command '{}'", token.trim_end()))
}

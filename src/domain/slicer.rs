//! Slicer import types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The slicing tool that produced an imported file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlicerKind {
    PrusaSlicer,
    Cura,
    OrcaSlicer,
    QidiStudio,
    #[default]
    Unknown,
}

impl SlicerKind {
    pub fn id(&self) -> &'static str {
        match self {
            SlicerKind::PrusaSlicer => "prusa-slicer",
            SlicerKind::Cura => "cura",
            SlicerKind::OrcaSlicer => "orca-slicer",
            SlicerKind::QidiStudio => "qidi-studio",
            SlicerKind::Unknown => "unknown",
        }
    }

    /// Product name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            SlicerKind::PrusaSlicer => "PrusaSlicer",
            SlicerKind::Cura => "Cura",
            SlicerKind::OrcaSlicer => "OrcaSlicer",
            SlicerKind::QidiStudio => "QIDI Studio",
            SlicerKind::Unknown => "unknown slicer",
        }
    }
}

impl std::fmt::Display for SlicerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which extractor produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Gcode,
    Json,
}

/// Detection metadata kept for display and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub format: SourceFormat,
    /// Why the slicer and the format were chosen, in order
    pub reasons: Vec<String>,
    /// The parsed JSON document, verbatim, for JSON imports
    pub json: Option<serde_json::Value>,
}

/// Job metadata extracted from a slicer output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicerJobData {
    pub slicer: SlicerKind,
    pub file_path: String,
    pub project_name: Option<String>,
    pub profile_name: Option<String>,
    pub material: Option<String>,
    pub print_time_seconds: Option<u64>,
    pub filament_used_g: Option<f64>,
    pub filament_used_mm: Option<f64>,
    pub filament_used_m: Option<f64>,
    /// Grams per extruder when the slicer reports a list
    pub filament_per_extruder_g: Vec<f64>,
    pub total_volume_cm3: Option<f64>,
    pub warnings: Vec<String>,
    pub raw: RawDetection,
}

impl SlicerJobData {
    pub fn has_filament_quantity(&self) -> bool {
        self.filament_used_g.is_some()
            || self.filament_used_mm.is_some()
            || self.filament_used_m.is_some()
    }
}

/// What made an import fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("The file is empty")]
    Empty,

    #[error("3MF project files are not supported, export G-code from the slicer instead")]
    Unsupported3mf,

    #[error("Unsupported file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

/// Fatal import failure, tagged with the best-guess slicer
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}")]
pub struct SlicerParseError {
    pub kind: ParseErrorKind,
    pub slicer: SlicerKind,
}

impl SlicerParseError {
    pub fn new(kind: ParseErrorKind, slicer: SlicerKind) -> Self {
        Self { kind, slicer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slicer_kind_serializes_as_id() {
        for kind in [
            SlicerKind::PrusaSlicer,
            SlicerKind::Cura,
            SlicerKind::OrcaSlicer,
            SlicerKind::QidiStudio,
            SlicerKind::Unknown,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn any_length_unit_counts_as_filament_quantity() {
        let mut job = SlicerJobData {
            slicer: SlicerKind::Cura,
            file_path: "part.gcode".into(),
            project_name: None,
            profile_name: None,
            material: None,
            print_time_seconds: Some(60),
            filament_used_g: None,
            filament_used_mm: None,
            filament_used_m: None,
            filament_per_extruder_g: vec![],
            total_volume_cm3: Some(3.0),
            warnings: vec![],
            raw: RawDetection {
                format: SourceFormat::Gcode,
                reasons: vec![],
                json: None,
            },
        };
        assert!(!job.has_filament_quantity());
        job.filament_used_m = Some(1.5);
        assert!(job.has_filament_quantity());
    }

    #[test]
    fn parse_error_message_names_cause() {
        let err = SlicerParseError::new(
            ParseErrorKind::InvalidJson("EOF while parsing".into()),
            SlicerKind::Cura,
        );
        assert_eq!(err.to_string(), "Invalid JSON: EOF while parsing");
        assert_eq!(err.slicer, SlicerKind::Cura);
    }
}

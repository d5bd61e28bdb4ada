//! Extraction from JSON job metadata.
//!
//! The document is parsed once into a `serde_json::Value`. Each field has a
//! snake_case and a camelCase spelling; the first one present wins. Values
//! may be numbers or strings ("1h 2m", "12.5 g"). The parsed document is kept
//! verbatim in `RawDetection::json`.

use serde_json::{Map, Value};

use super::fields::{fill, total, JobFields};
use super::values::{parse_duration_seconds, parse_number_list, parse_text};
use crate::domain::{
    ParseErrorKind, RawDetection, SlicerJobData, SlicerKind, SlicerParseError, SourceFormat,
};

const PRINT_TIME_KEYS: [&str; 2] = ["print_time", "printTime"];
const GRAMS_KEYS: [&str; 2] = ["filament_used_g", "filamentUsedG"];
const MILLIMETERS_KEYS: [&str; 2] = ["filament_used_mm", "filamentUsedMm"];
const METERS_KEYS: [&str; 2] = ["filament_used_m", "filamentUsedM"];
const VOLUME_KEYS: [&str; 2] = ["filament_volume_cm3", "filamentVolumeCm3"];
const PROJECT_KEYS: [&str; 2] = ["project_name", "projectName"];
const PROFILE_KEYS: [&str; 2] = ["profile_name", "profileName"];
const MATERIAL_KEYS: [&str; 2] = ["material", "filament_type"];

/// First present key of `keys`
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// Numbers, numeric strings and arrays of either, one entry per extruder
fn numbers(value: &Value) -> Vec<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).into_iter().collect(),
        Value::String(s) => parse_number_list(s),
        Value::Array(items) => items.iter().flat_map(numbers).collect(),
        _ => Vec::new(),
    }
}

fn seconds(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_duration_seconds(s),
        _ => None,
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => parse_text(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(text).collect();
            (!parts.is_empty()).then(|| parts.join(";"))
        }
        _ => None,
    }
}

pub fn extract(
    file_path: &str,
    content: &str,
    slicer: SlicerKind,
    mut reasons: Vec<String>,
) -> Result<SlicerJobData, SlicerParseError> {
    let document: Value = serde_json::from_str(content).map_err(|e| {
        log::warn!("Invalid JSON in '{file_path}': {e}");
        SlicerParseError::new(ParseErrorKind::InvalidJson(e.to_string()), slicer)
    })?;
    reasons.push("'.json' extension".to_string());

    let mut fields = JobFields::default();
    match document.as_object() {
        Some(obj) => {
            if let Some(v) = lookup(obj, &PRINT_TIME_KEYS) {
                fill(&mut fields.print_time_seconds, seconds(v));
            }
            if let Some(v) = lookup(obj, &GRAMS_KEYS) {
                fields.fill_grams(numbers(v));
            }
            if let Some(v) = lookup(obj, &MILLIMETERS_KEYS) {
                fill(&mut fields.filament_used_mm, total(&numbers(v)));
            }
            if let Some(v) = lookup(obj, &METERS_KEYS) {
                fill(&mut fields.filament_used_m, total(&numbers(v)));
            }
            if let Some(v) = lookup(obj, &VOLUME_KEYS) {
                fill(&mut fields.total_volume_cm3, total(&numbers(v)));
            }
            if let Some(v) = lookup(obj, &PROJECT_KEYS) {
                fill(&mut fields.project_name, text(v));
            }
            if let Some(v) = lookup(obj, &PROFILE_KEYS) {
                fill(&mut fields.profile_name, text(v));
            }
            if let Some(v) = lookup(obj, &MATERIAL_KEYS) {
                fill(&mut fields.material, text(v));
            }
        }
        None => reasons.push("top-level JSON value is not an object".to_string()),
    }

    let raw = RawDetection {
        format: SourceFormat::Json,
        reasons,
        json: Some(document),
    };
    Ok(fields.finish(slicer, file_path, raw))
}

//! Header extraction from G-code comments.
//!
//! One pass over the lines. Each field has its own list of comment keys;
//! the text after a key up to the next `;` is the raw value. Text fields
//! keep the rest of the line, since PrusaSlicer separates per-extruder
//! material names with `;`.

use super::fields::{fill, JobFields};
use super::values::{parse_duration_seconds, parse_number_list, parse_text};
use crate::domain::{RawDetection, SlicerJobData, SlicerKind, SourceFormat};

const PRINT_TIME_KEYS: &[&str] = &[
    ";TIME:",
    "; estimated printing time (normal mode) =",
    "; estimated printing time =",
    "; total estimated time:",
];

const GRAMS_KEYS: &[&str] = &[
    "; total filament used [g] =",
    "; filament used [g] =",
    "; total filament weight [g] :",
];

const MILLIMETERS_KEYS: &[&str] = &["; filament used [mm] =", "; total filament length [mm] :"];

const METERS_KEYS: &[&str] = &[";Filament used:", "; filament used [m] ="];

const VOLUME_KEYS: &[&str] = &["; filament used [cm3] =", "; total filament volume [cm^3] :"];

const PROJECT_KEYS: &[&str] = &["; project_name =", ";PROJECT:", "; model_name ="];

// Config blocks are written in alphabetical order, so `default_print_profile`
// and `filament_settings_id` would be seen first. They name the printer's
// default profile and the filament preset, not what the job used.
const PROFILE_KEYS: &[&str] = &["; print_settings_id =", ";PROFILE:"];

const MATERIAL_KEYS: &[&str] = &["; filament_type =", ";MATERIAL:"];

/// The key that matched and the text after it
fn after_key<'a>(line: &'a str, keys: &'static [&'static str]) -> Option<(&'static str, &'a str)> {
    keys.iter()
        .find_map(|key| line.find(key).map(|pos| (*key, &line[pos + key.len()..])))
}

/// Numeric values end at the next comment separator
fn numeric_part(value: &str) -> &str {
    value.split(';').next().unwrap_or(value)
}

pub fn extract(
    file_path: &str,
    content: &str,
    slicer: SlicerKind,
    reasons: Vec<String>,
) -> SlicerJobData {
    let mut fields = JobFields::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if fields.print_time_seconds.is_none() {
            if let Some((key, value)) = after_key(line, PRINT_TIME_KEYS) {
                let seconds = parse_duration_seconds(numeric_part(value));
                if fill(&mut fields.print_time_seconds, seconds) {
                    log::debug!("print time from '{key}'");
                }
            }
        }
        if fields.filament_used_g.is_none() {
            if let Some((key, value)) = after_key(line, GRAMS_KEYS) {
                if fields.fill_grams(parse_number_list(numeric_part(value))) {
                    log::debug!("filament grams from '{key}'");
                }
            }
        }
        if fields.filament_used_mm.is_none() {
            if let Some((_, value)) = after_key(line, MILLIMETERS_KEYS) {
                fill(&mut fields.filament_used_mm, sum(numeric_part(value)));
            }
        }
        if fields.filament_used_m.is_none() {
            if let Some((_, value)) = after_key(line, METERS_KEYS) {
                fill(&mut fields.filament_used_m, sum(numeric_part(value)));
            }
        }
        if fields.total_volume_cm3.is_none() {
            if let Some((_, value)) = after_key(line, VOLUME_KEYS) {
                fill(&mut fields.total_volume_cm3, sum(numeric_part(value)));
            }
        }
        if fields.project_name.is_none() {
            if let Some((_, value)) = after_key(line, PROJECT_KEYS) {
                fill(&mut fields.project_name, parse_text(value));
            }
        }
        if fields.profile_name.is_none() {
            if let Some((_, value)) = after_key(line, PROFILE_KEYS) {
                fill(&mut fields.profile_name, parse_text(value));
            }
        }
        if fields.material.is_none() {
            if let Some((_, value)) = after_key(line, MATERIAL_KEYS) {
                fill(&mut fields.material, parse_text(value));
            }
        }
    }

    let raw = RawDetection {
        format: SourceFormat::Gcode,
        reasons,
        json: None,
    };
    fields.finish(slicer, file_path, raw)
}

fn sum(value: &str) -> Option<f64> {
    super::fields::total(&parse_number_list(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRUSA_HEADER: &str = "\
; generated by PrusaSlicer 2.8.1+linux-x64-GTK3 on 2024-10-01 at 12:00:00 UTC
G28 ; home
G1 X10 Y10 F3000
; filament used [mm] = 5432.10, 123.45
; filament used [cm3] = 13.07, 0.30
; filament used [g] = 16.21, 0.37
; total filament used [g] = 16.58
; estimated printing time (normal mode) = 1h 23m 45s
; estimated printing time (silent mode) = 1h 30m 2s
; estimated first layer printing time (normal mode) = 2m 10s
; filament_type = PLA;PETG
; print_settings_id = 0.20mm QUALITY @MK4
";

    fn extract_str(content: &str) -> SlicerJobData {
        extract("part.gcode", content, SlicerKind::Unknown, vec![])
    }

    #[test]
    fn prusa_header() {
        let job = extract("part.gcode", PRUSA_HEADER, SlicerKind::PrusaSlicer, vec![]);
        assert_eq!(job.print_time_seconds, Some(5025));
        // per-extruder line comes first, so it wins over the total line
        assert_eq!(job.filament_used_g, Some(16.21 + 0.37));
        assert_eq!(job.filament_per_extruder_g, vec![16.21, 0.37]);
        assert_eq!(job.filament_used_mm, Some(5432.10 + 123.45));
        assert_eq!(job.filament_used_m, Some((5432.10 + 123.45) / 1000.0));
        assert_eq!(job.total_volume_cm3, Some(13.07 + 0.30));
        assert_eq!(job.material.as_deref(), Some("PLA;PETG"));
        assert_eq!(job.profile_name.as_deref(), Some("0.20mm QUALITY @MK4"));
        assert!(job.warnings.is_empty());
    }

    #[test]
    fn cura_header() {
        let content = "\
;FLAVOR:Marlin
;TIME:6123
;Filament used: 2.34567m
;Layer height: 0.2
;Generated with Cura_SteamEngine 5.7.1
;TIME:9999
M140 S60
";
        let job = extract_str(content);
        assert_eq!(job.print_time_seconds, Some(6123));
        assert_eq!(job.filament_used_m, Some(2.34567));
        assert_eq!(job.filament_used_mm, Some(2.34567 * 1000.0));
        assert_eq!(job.filament_used_g, None);
        assert!(job.warnings.is_empty());
    }

    #[test]
    fn orca_inline_time_stops_at_next_comment() {
        let content = "\
; HEADER_BLOCK_START
; generated by OrcaSlicer 2.1.1
; model printing time: 1h 2m 3s; total estimated time: 1h 10m 0s
; HEADER_BLOCK_END
; total filament weight [g] : 21.04
; total filament length [mm] : 7031.25
";
        let job = extract_str(content);
        assert_eq!(job.print_time_seconds, Some(4200));
        assert_eq!(job.filament_used_g, Some(21.04));
        assert_eq!(job.filament_used_mm, Some(7031.25));
    }

    #[test]
    fn sorted_config_block_reports_used_profile_and_filament_type() {
        let content = "\
; estimated printing time (normal mode) = 42m 10s
; filament used [g] = 9.87
; prusaslicer_config = begin
; default_filament_profile = \"Prusament PLA\"
; default_print_profile = 0.15mm QUALITY @MK4
; filament_settings_id = \"Prusament PETG\"
; filament_type = PETG
; print_settings_id = 0.20mm SPEED @MK4
; prusaslicer_config = end
";
        let job = extract("part.gcode", content, SlicerKind::PrusaSlicer, vec![]);
        assert_eq!(job.profile_name.as_deref(), Some("0.20mm SPEED @MK4"));
        assert_eq!(job.material.as_deref(), Some("PETG"));
    }

    #[test]
    fn missing_time_gives_one_warning() {
        let job = extract_str("; filament used [g] = 12.5\nG1 X1\n");
        assert_eq!(job.print_time_seconds, None);
        assert_eq!(job.filament_used_g, Some(12.5));
        assert_eq!(job.warnings.len(), 1);
        assert!(job.warnings[0].contains("print time"));
    }

    #[test]
    fn missing_everything_gives_two_warnings() {
        let job = extract_str("G28\nG1 X1 Y1\n");
        assert_eq!(job.warnings.len(), 2);
        assert_eq!(job.raw.format, SourceFormat::Gcode);
    }

    #[test]
    fn unparseable_value_leaves_field_open_for_later_keys() {
        let content = ";TIME:unknown\n; estimated printing time = 10m\n";
        let job = extract_str(content);
        assert_eq!(job.print_time_seconds, Some(600));
    }
}

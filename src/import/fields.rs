//! Field accumulator shared by the G-code and JSON extractors.
//!
//! Each field is written at most once: the first extracted value wins and
//! later candidates are ignored. `finish` reconciles the filament length
//! units and adds the warnings for anything the user must enter by hand.

use crate::domain::{RawDetection, SlicerJobData, SlicerKind};

#[derive(Debug, Default)]
pub struct JobFields {
    pub print_time_seconds: Option<f64>,
    pub filament_used_g: Option<f64>,
    pub filament_per_extruder_g: Vec<f64>,
    pub filament_used_mm: Option<f64>,
    pub filament_used_m: Option<f64>,
    pub total_volume_cm3: Option<f64>,
    pub project_name: Option<String>,
    pub profile_name: Option<String>,
    pub material: Option<String>,
}

/// Store `value` in `slot` unless the slot is already filled.
/// Returns true when the value was taken.
pub fn fill<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    if slot.is_some() {
        return false;
    }
    match value {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

/// Sum a per-extruder list. Empty lists are absent.
pub fn total(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum())
}

impl JobFields {
    /// Grams can come as a single figure or one figure per extruder
    pub fn fill_grams(&mut self, values: Vec<f64>) -> bool {
        if self.filament_used_g.is_some() {
            return false;
        }
        let taken = fill(&mut self.filament_used_g, total(&values));
        if taken && values.len() > 1 {
            self.filament_per_extruder_g = values;
        }
        taken
    }

    pub fn finish(mut self, slicer: SlicerKind, file_path: &str, raw: RawDetection) -> SlicerJobData {
        match (self.filament_used_mm, self.filament_used_m) {
            (Some(mm), None) => self.filament_used_m = Some(mm / 1000.0),
            (None, Some(m)) => self.filament_used_mm = Some(m * 1000.0),
            _ => {}
        }

        let print_time_seconds = self
            .print_time_seconds
            .filter(|s| *s >= 0.0)
            .map(|s| s.round() as u64);

        let mut job = SlicerJobData {
            slicer,
            file_path: file_path.to_string(),
            project_name: self.project_name,
            profile_name: self.profile_name,
            material: self.material,
            print_time_seconds,
            filament_used_g: self.filament_used_g,
            filament_used_mm: self.filament_used_mm,
            filament_used_m: self.filament_used_m,
            filament_per_extruder_g: self.filament_per_extruder_g,
            total_volume_cm3: self.total_volume_cm3,
            warnings: Vec::new(),
            raw,
        };
        if job.print_time_seconds.is_none() {
            job.warnings.push(missing_time_warning(slicer));
        }
        if !job.has_filament_quantity() {
            job.warnings.push(missing_filament_warning(slicer));
        }
        job
    }
}

fn source_label(slicer: SlicerKind) -> String {
    match slicer {
        SlicerKind::Unknown => "the file".to_string(),
        known => format!("the {} file", known.display_name()),
    }
}

fn missing_time_warning(slicer: SlicerKind) -> String {
    format!(
        "No print time estimate found in {}. Please enter the print time manually.",
        source_label(slicer)
    )
}

fn missing_filament_warning(slicer: SlicerKind) -> String {
    format!(
        "No filament usage (g, mm or m) found in {}. Please enter the filament amount manually.",
        source_label(slicer)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceFormat;

    fn raw() -> RawDetection {
        RawDetection {
            format: SourceFormat::Gcode,
            reasons: vec![],
            json: None,
        }
    }

    #[test]
    fn first_value_wins() {
        let mut slot = None;
        assert!(fill(&mut slot, Some(1.0)));
        assert!(!fill(&mut slot, Some(2.0)));
        assert_eq!(slot, Some(1.0));
    }

    #[test]
    fn absent_value_leaves_slot_open() {
        let mut slot: Option<f64> = None;
        assert!(!fill(&mut slot, None));
        assert!(fill(&mut slot, Some(3.0)));
    }

    #[test]
    fn per_extruder_grams_are_summed() {
        let mut fields = JobFields::default();
        assert!(fields.fill_grams(vec![10.0, 2.5]));
        assert_eq!(fields.filament_used_g, Some(12.5));
        assert_eq!(fields.filament_per_extruder_g, vec![10.0, 2.5]);
    }

    #[test]
    fn single_grams_value_has_no_extruder_list() {
        let mut fields = JobFields::default();
        fields.fill_grams(vec![7.0]);
        assert!(fields.filament_per_extruder_g.is_empty());
    }

    #[test]
    fn lengths_are_reconciled() {
        let fields = JobFields {
            filament_used_mm: Some(2500.0),
            print_time_seconds: Some(60.0),
            ..JobFields::default()
        };
        let job = fields.finish(SlicerKind::PrusaSlicer, "a.gcode", raw());
        assert_eq!(job.filament_used_m, Some(2.5));
        assert!(job.warnings.is_empty());

        let fields = JobFields {
            filament_used_m: Some(1.25),
            ..JobFields::default()
        };
        let job = fields.finish(SlicerKind::Cura, "a.gcode", raw());
        assert_eq!(job.filament_used_mm, Some(1250.0));
        assert_eq!(job.warnings.len(), 1);
    }

    #[test]
    fn empty_fields_give_two_warnings_naming_the_slicer() {
        let job = JobFields::default().finish(SlicerKind::OrcaSlicer, "a.gcode", raw());
        assert_eq!(job.warnings.len(), 2);
        assert!(job.warnings[0].contains("print time"));
        assert!(job.warnings[0].contains("OrcaSlicer"));
        assert!(job.warnings[1].contains("filament"));
    }
}

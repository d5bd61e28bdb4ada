//! Human-readable reasons a calculation cannot run yet
//!
//! These mirror the preconditions of `calculate_costs` for the UI. They never
//! change the numbers: an empty list here means `calculate_costs` returns
//! `Some`, apart from the AMS slot check which is advisory.

use super::costs::print_time_hours;
use crate::domain::{Filament, PrintTime, Printer, SelectedFilament, Settings};
use crate::i18n::Message;

/// Problems with the calculation inputs, in display order
pub fn validation_messages(
    printer: Option<&Printer>,
    selected: &[SelectedFilament],
    print_time: PrintTime,
    filaments: &[Filament],
) -> Vec<Message> {
    let mut messages = Vec::new();

    match printer {
        None => messages.push(Message::NoPrinter),
        Some(p) if selected.len() > p.max_filaments() => {
            messages.push(Message::TooManyFilaments {
                max: p.max_filaments(),
            })
        }
        Some(_) => {}
    }

    if selected.is_empty() {
        messages.push(Message::NoFilament);
    }

    for (i, sel) in selected.iter().enumerate() {
        let line = i + 1;
        if sel.resolve(filaments).is_none() {
            messages.push(Message::FilamentNotChosen { line });
        }
        if sel.used_grams <= 0.0 {
            messages.push(Message::GramsNotPositive { line });
        }
    }

    if print_time_hours(print_time.hours, print_time.minutes, print_time.seconds) <= 0.0 {
        messages.push(Message::PrintTimeZero);
    }

    messages
}

/// Localized validation text for the settings' language
pub fn validate_inputs(
    printer: Option<&Printer>,
    selected: &[SelectedFilament],
    print_time: PrintTime,
    filaments: &[Filament],
    settings: &Settings,
) -> Vec<String> {
    validation_messages(printer, selected, print_time, filaments)
        .iter()
        .map(|m| m.text(settings.language))
        .collect()
}

/// Misconfigurations that let the calculation run but skew its result
pub fn settings_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();
    if settings.electricity_price <= 0.0 {
        log::warn!(
            "Electricity price is {}, electricity and drying costs will be zero",
            settings.electricity_price
        );
        warnings.push(Message::ElectricityPriceNotSet.text(settings.language));
    }
    warnings
}

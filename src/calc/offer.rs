//! Turning a calculation into a customer offer

use chrono::Utc;
use uuid::Uuid;

use super::pricing::quote;
use crate::domain::{
    CalculationResult, Filament, Offer, OfferDraft, OfferFilament, PrintTime, Printer,
    SelectedFilament, Settings, SlicerJobData,
};

/// Snapshot the calculation into a new offer.
///
/// Filament lines that don't resolve are left out; callers only get here
/// with a `CalculationResult`, which already guarantees they all resolve.
#[allow(clippy::too_many_arguments)]
pub fn build_offer(
    draft: &OfferDraft,
    printer: &Printer,
    selected: &[SelectedFilament],
    filaments: &[Filament],
    print_time: PrintTime,
    costs: CalculationResult,
    settings: &Settings,
    job: Option<&SlicerJobData>,
) -> Offer {
    let profit_percentage = draft
        .profit_percentage
        .unwrap_or(settings.default_profit_percentage);
    let price = quote(costs.total_cost, profit_percentage);

    let lines = selected
        .iter()
        .filter_map(|sel| {
            sel.resolve(filaments).map(|f| OfferFilament {
                label: f.label(),
                used_grams: sel.used_grams,
                needs_drying: sel.needs_drying,
            })
        })
        .collect();

    Offer {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        customer_name: draft.customer_name.trim().to_string(),
        description: draft.description.trim().to_string(),
        printer_name: printer.name.clone(),
        print_time,
        filaments: lines,
        costs,
        profit_percentage,
        profit: price.profit,
        final_price: price.final_price,
        currency: costs.currency,
        source_file: job.map(|j| j.file_path.clone()),
        slicer: job.map(|j| j.slicer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn costs() -> CalculationResult {
        CalculationResult {
            filament_cost: 8.0,
            electricity_cost: 0.15,
            drying_cost: 0.06,
            usage_cost: 1.0,
            total_cost: 9.21,
            currency: Currency::Eur,
        }
    }

    fn printer() -> Printer {
        Printer {
            id: "p1".into(),
            name: "Core One".into(),
            power: 150.0,
            usage_cost: 0.5,
            ams_units: vec![],
        }
    }

    fn filaments() -> Vec<Filament> {
        vec![Filament {
            id: "f1".into(),
            brand: "Prusament".into(),
            material: "PETG".into(),
            color: "Orange".into(),
            price_per_kg: 30.0,
        }]
    }

    #[test]
    fn profit_falls_back_to_settings_default() {
        let draft = OfferDraft {
            customer_name: "  ACME Ltd  ".into(),
            ..OfferDraft::default()
        };
        let offer = build_offer(
            &draft,
            &printer(),
            &[SelectedFilament::new(0, 120.0)],
            &filaments(),
            PrintTime::new(2.0, 0.0, 0.0),
            costs(),
            &Settings::default(),
            None,
        );
        assert_eq!(offer.customer_name, "ACME Ltd");
        assert_eq!(offer.profit_percentage, 30.0);
        assert_eq!(offer.profit, 2.76);
        assert_eq!(offer.final_price, 11.97);
        assert_eq!(offer.filaments[0].label, "Prusament PETG (Orange)");
        assert!(offer.source_file.is_none());
    }

    #[test]
    fn explicit_profit_overrides_default() {
        let draft = OfferDraft {
            customer_name: "Jo".into(),
            description: "Bracket".into(),
            profit_percentage: Some(0.0),
        };
        let offer = build_offer(
            &draft,
            &printer(),
            &[SelectedFilament::new(0, 120.0)],
            &filaments(),
            PrintTime::new(2.0, 0.0, 0.0),
            costs(),
            &Settings::default(),
            None,
        );
        assert_eq!(offer.final_price, 9.21);
    }
}

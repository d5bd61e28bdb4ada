//! Per-job cost breakdown
//!
//! Every component is converted into the target currency and rounded to
//! cents on its own. The total is the rounded sum of the rounded components,
//! so a breakdown always adds up to the total shown next to it.

use crate::domain::{
    CalculationResult, Currency, Filament, PrintTime, Printer, SelectedFilament, Settings,
    ELECTRICITY_UNITS_PER_CURRENCY,
};
use crate::ports::CurrencyConverter;

/// Round a monetary amount to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `h + m/60 + s/3600`
pub fn print_time_hours(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours + minutes / 60.0 + seconds / 3600.0
}

/// Convert from the reference currency and round
fn to_target(amount: f64, target: Currency, converter: &dyn CurrencyConverter) -> f64 {
    round2(converter.convert(amount, target))
}

/// kWh priced in electricity units, expressed in the reference currency
fn energy_price(kwh: f64, electricity_price: f64) -> f64 {
    kwh * electricity_price / ELECTRICITY_UNITS_PER_CURRENCY
}

/// Sum of `grams / 1000 * price_per_kg`. Unresolvable lines contribute nothing.
pub fn filament_cost(
    selected: &[SelectedFilament],
    filaments: &[Filament],
    target: Currency,
    converter: &dyn CurrencyConverter,
) -> f64 {
    let reference: f64 = selected
        .iter()
        .filter_map(|sel| {
            sel.resolve(filaments)
                .map(|f| sel.used_grams / 1000.0 * f.price_per_kg)
        })
        .sum();
    to_target(reference, target, converter)
}

/// Printer plus AMS power over the print duration
pub fn electricity_cost(
    printer: &Printer,
    print_hours: f64,
    electricity_price: f64,
    target: Currency,
    converter: &dyn CurrencyConverter,
) -> f64 {
    let kwh = printer.total_power() / 1000.0 * print_hours;
    to_target(energy_price(kwh, electricity_price), target, converter)
}

/// Dryer energy for every line that asks for drying with a real time and power
pub fn drying_cost(
    selected: &[SelectedFilament],
    electricity_price: f64,
    target: Currency,
    converter: &dyn CurrencyConverter,
) -> f64 {
    let reference: f64 = selected
        .iter()
        .filter(|sel| sel.needs_drying && sel.drying_time > 0.0 && sel.drying_power > 0.0)
        .map(|sel| energy_price(sel.drying_power / 1000.0 * sel.drying_time, electricity_price))
        .sum();
    to_target(reference, target, converter)
}

/// Wear/amortization: hourly rate times duration
pub fn usage_cost(
    printer: &Printer,
    print_hours: f64,
    target: Currency,
    converter: &dyn CurrencyConverter,
) -> f64 {
    to_target(printer.usage_cost * print_hours, target, converter)
}

/// Compute the full breakdown, or `None` while the inputs are incomplete.
///
/// Incomplete means: no printer, no filament lines, a line with a negative
/// or dangling index, a line with `used_grams <= 0`, or zero print time.
/// A non-positive electricity price is computed as given.
pub fn calculate_costs(
    printer: Option<&Printer>,
    selected: &[SelectedFilament],
    print_time: PrintTime,
    settings: &Settings,
    filaments: &[Filament],
    converter: &dyn CurrencyConverter,
) -> Option<CalculationResult> {
    let printer = printer?;
    if selected.is_empty() {
        return None;
    }
    if selected
        .iter()
        .any(|sel| sel.filament_index < 0 || sel.used_grams <= 0.0)
    {
        return None;
    }
    if selected.iter().any(|sel| sel.resolve(filaments).is_none()) {
        return None;
    }

    let hours = print_time_hours(print_time.hours, print_time.minutes, print_time.seconds);
    if hours <= 0.0 {
        return None;
    }

    let target = settings.currency;
    let filament = filament_cost(selected, filaments, target, converter);
    let electricity = electricity_cost(printer, hours, settings.electricity_price, target, converter);
    let drying = drying_cost(selected, settings.electricity_price, target, converter);
    let usage = usage_cost(printer, hours, target, converter);
    let total = round2(filament + electricity + drying + usage);

    log::debug!(
        "Costs for '{}' over {hours:.3} h: filament={filament} electricity={electricity} drying={drying} usage={usage} total={total} {target}",
        printer.name
    );

    Some(CalculationResult {
        filament_cost: filament,
        electricity_cost: electricity,
        drying_cost: drying,
        usage_cost: usage,
        total_cost: total,
        currency: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmsUnit;

    /// Multiplies by a fixed rate for every currency except the reference
    struct FixedRate(f64);

    impl CurrencyConverter for FixedRate {
        fn convert(&self, amount: f64, target: Currency) -> f64 {
            if target == Currency::REFERENCE {
                amount
            } else {
                amount * self.0
            }
        }
    }

    const IDENTITY: FixedRate = FixedRate(1.0);

    fn printer(power: f64, usage_cost: f64, ams_power: &[f64]) -> Printer {
        Printer {
            id: "p1".into(),
            name: "Test Printer".into(),
            power,
            usage_cost,
            ams_units: ams_power
                .iter()
                .map(|&power| AmsUnit {
                    name: "AMS".into(),
                    power,
                })
                .collect(),
        }
    }

    fn filament(price_per_kg: f64) -> Filament {
        Filament {
            id: format!("f-{price_per_kg}"),
            brand: "Generic".into(),
            material: "PLA".into(),
            color: "White".into(),
            price_per_kg,
        }
    }

    fn settings(electricity_price: f64) -> Settings {
        Settings {
            electricity_price,
            ..Settings::default()
        }
    }

    fn one_hour() -> PrintTime {
        PrintTime::new(1.0, 0.0, 0.0)
    }

    // --- print_time_hours ---

    #[test]
    fn print_time_hours_combines_components() {
        assert_eq!(print_time_hours(2.0, 30.0, 0.0), 2.5);
        assert_eq!(print_time_hours(0.0, 0.0, 0.0), 0.0);
        assert_eq!(print_time_hours(0.0, 0.0, 3600.0), 1.0);
    }

    // --- components ---

    #[test]
    fn filament_cost_sums_lines() {
        let filaments = vec![filament(20.0), filament(30.0)];
        let selected = vec![SelectedFilament::new(0, 250.0), SelectedFilament::new(1, 100.0)];
        assert_eq!(filament_cost(&selected, &filaments, Currency::Eur, &IDENTITY), 8.0);
    }

    #[test]
    fn electricity_cost_200w_one_hour() {
        // 0.2 kWh at 30 cents/kWh = 0.06
        let p = printer(200.0, 0.0, &[]);
        assert_eq!(electricity_cost(&p, 1.0, 30.0, Currency::Eur, &IDENTITY), 0.06);
    }

    #[test]
    fn electricity_cost_includes_ams_power() {
        // (200 + 2 * 25) W for 2 h = 0.5 kWh at 30 cents = 0.15
        let p = printer(200.0, 0.0, &[25.0, 25.0]);
        assert_eq!(electricity_cost(&p, 2.0, 30.0, Currency::Eur, &IDENTITY), 0.15);
    }

    #[test]
    fn electricity_cost_converts_then_rounds() {
        // 0.06 EUR * 400 = 24.00 in the target currency
        let p = printer(200.0, 0.0, &[]);
        assert_eq!(electricity_cost(&p, 1.0, 30.0, Currency::Huf, &FixedRate(400.0)), 24.0);
    }

    #[test]
    fn drying_cost_only_counts_complete_requests() {
        let selected = vec![
            SelectedFilament::new(0, 100.0).with_drying(4.0, 50.0),
            SelectedFilament::new(0, 100.0).with_drying(0.0, 50.0),
            SelectedFilament::new(0, 100.0).with_drying(4.0, 0.0),
            SelectedFilament::new(0, 100.0),
        ];
        // 4 h at 50 W = 0.2 kWh at 30 cents = 0.06
        assert_eq!(drying_cost(&selected, 30.0, Currency::Eur, &IDENTITY), 0.06);
    }

    #[test]
    fn usage_cost_scales_with_hours() {
        let p = printer(0.0, 0.5, &[]);
        assert_eq!(usage_cost(&p, 2.5, Currency::Eur, &IDENTITY), 1.25);
    }

    // --- calculate_costs ---

    #[test]
    fn full_breakdown() {
        let p = printer(200.0, 0.5, &[25.0, 25.0]);
        let filaments = vec![filament(20.0), filament(30.0)];
        let selected = vec![
            SelectedFilament::new(0, 250.0),
            SelectedFilament::new(1, 100.0).with_drying(4.0, 50.0),
        ];
        let result = calculate_costs(
            Some(&p),
            &selected,
            PrintTime::new(2.0, 0.0, 0.0),
            &settings(30.0),
            &filaments,
            &IDENTITY,
        )
        .unwrap();

        assert_eq!(result.filament_cost, 8.0);
        assert_eq!(result.electricity_cost, 0.15);
        assert_eq!(result.drying_cost, 0.06);
        assert_eq!(result.usage_cost, 1.0);
        assert_eq!(result.total_cost, 9.21);
        assert_eq!(result.currency, Currency::Eur);
    }

    #[test]
    fn absent_without_printer() {
        let filaments = vec![filament(20.0)];
        let selected = vec![SelectedFilament::new(0, 10.0)];
        assert!(
            calculate_costs(None, &selected, one_hour(), &settings(30.0), &filaments, &IDENTITY)
                .is_none()
        );
    }

    #[test]
    fn absent_without_filaments() {
        let p = printer(200.0, 0.5, &[]);
        assert!(
            calculate_costs(Some(&p), &[], one_hour(), &settings(30.0), &[filament(20.0)], &IDENTITY)
                .is_none()
        );
    }

    #[test]
    fn absent_for_invalid_filament_lines() {
        let p = printer(200.0, 0.5, &[]);
        let filaments = vec![filament(20.0)];
        for bad in [
            SelectedFilament::new(-1, 10.0),
            SelectedFilament::new(0, 0.0),
            SelectedFilament::new(0, -5.0),
            SelectedFilament::new(3, 10.0),
        ] {
            let selected = vec![SelectedFilament::new(0, 10.0), bad.clone()];
            assert!(
                calculate_costs(Some(&p), &selected, one_hour(), &settings(30.0), &filaments, &IDENTITY)
                    .is_none(),
                "expected no result for {bad:?}"
            );
        }
    }

    #[test]
    fn absent_for_zero_print_time() {
        let p = printer(200.0, 0.5, &[]);
        let filaments = vec![filament(20.0)];
        let selected = vec![SelectedFilament::new(0, 10.0)];
        assert!(calculate_costs(
            Some(&p),
            &selected,
            PrintTime::default(),
            &settings(30.0),
            &filaments,
            &IDENTITY
        )
        .is_none());
    }

    #[test]
    fn zero_electricity_price_still_computes() {
        let p = printer(200.0, 0.5, &[]);
        let filaments = vec![filament(20.0)];
        let selected = vec![SelectedFilament::new(0, 100.0).with_drying(2.0, 100.0)];
        let result =
            calculate_costs(Some(&p), &selected, one_hour(), &settings(0.0), &filaments, &IDENTITY)
                .unwrap();
        assert_eq!(result.electricity_cost, 0.0);
        assert_eq!(result.drying_cost, 0.0);
        assert_eq!(result.total_cost, 2.5);
    }

    #[test]
    fn total_is_sum_of_rounded_components() {
        // Filament 10 g at 0.4/kg = 0.004 and usage 0.004/h for 1 h = 0.004.
        // Each rounds to 0.00; rounding the raw sum (0.008) would give 0.01.
        let p = printer(0.0, 0.004, &[]);
        let filaments = vec![filament(0.4)];
        let selected = vec![SelectedFilament::new(0, 10.0)];
        let result =
            calculate_costs(Some(&p), &selected, one_hour(), &settings(30.0), &filaments, &IDENTITY)
                .unwrap();
        assert_eq!(result.filament_cost, 0.0);
        assert_eq!(result.usage_cost, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn total_is_stable_under_rerounding() {
        let p = printer(237.0, 0.37, &[11.0]);
        let filaments = vec![filament(23.99), filament(31.5)];
        let selected = vec![
            SelectedFilament::new(0, 123.4),
            SelectedFilament::new(1, 56.7).with_drying(3.5, 45.0),
        ];
        let result = calculate_costs(
            Some(&p),
            &selected,
            PrintTime::new(3.0, 17.0, 42.0),
            &settings(41.3),
            &filaments,
            &FixedRate(1.0873),
        )
        .unwrap();
        let sum = result.filament_cost + result.electricity_cost + result.drying_cost + result.usage_cost;
        assert_eq!(result.total_cost, round2(sum));
        assert_eq!(round2(result.total_cost), result.total_cost);
    }
}

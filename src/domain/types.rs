//! Core domain types

use serde::{Deserialize, Serialize};

/// Filament slots hosted by one AMS unit
pub const SLOTS_PER_AMS: usize = 4;

/// Display currencies. Prices are stored in `Currency::REFERENCE` and
/// converted on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Huf,
    Chf,
    Pln,
}

impl Currency {
    /// The currency filament prices and usage rates are stored in
    pub const REFERENCE: Currency = Currency::Eur;

    pub const ALL: [Currency; 6] = [
        Currency::Eur,
        Currency::Usd,
        Currency::Gbp,
        Currency::Huf,
        Currency::Chf,
        Currency::Pln,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Huf => "HUF",
            Currency::Chf => "CHF",
            Currency::Pln => "PLN",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Message language. Only changes the wording of validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Hu,
}

/// An AMS (automatic material system) unit attached to a printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmsUnit {
    pub name: String,
    /// Power draw in watts
    pub power: f64,
}

/// A printer in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Printer {
    pub id: String,
    pub name: String,
    /// Rated power in watts
    pub power: f64,
    /// Wear/amortization rate in the reference currency per hour
    pub usage_cost: f64,
    #[serde(default)]
    pub ams_units: Vec<AmsUnit>,
}

impl Printer {
    pub fn ams_count(&self) -> usize {
        self.ams_units.len()
    }

    /// Printer power plus every attached AMS unit, in watts
    pub fn total_power(&self) -> f64 {
        self.power + self.ams_units.iter().map(|ams| ams.power).sum::<f64>()
    }

    /// How many filaments one job may use. A printer without AMS feeds one spool.
    pub fn max_filaments(&self) -> usize {
        match self.ams_count() {
            0 => 1,
            n => n * SLOTS_PER_AMS,
        }
    }
}

/// A filament in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filament {
    pub id: String,
    pub brand: String,
    pub material: String,
    pub color: String,
    /// Price per kilogram in the reference currency
    pub price_per_kg: f64,
}

impl Filament {
    /// "Brand Material (Color)", used on offers
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.brand, self.material, self.color)
    }
}

/// One filament line of a calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFilament {
    /// Index into the filament list; negative while nothing is chosen
    pub filament_index: i64,
    pub used_grams: f64,
    #[serde(default)]
    pub needs_drying: bool,
    /// Drying duration in hours
    #[serde(default)]
    pub drying_time: f64,
    /// Dryer power in watts
    #[serde(default)]
    pub drying_power: f64,
}

impl SelectedFilament {
    pub fn new(filament_index: i64, used_grams: f64) -> Self {
        Self {
            filament_index,
            used_grams,
            needs_drying: false,
            drying_time: 0.0,
            drying_power: 0.0,
        }
    }

    pub fn with_drying(mut self, drying_time: f64, drying_power: f64) -> Self {
        self.needs_drying = true;
        self.drying_time = drying_time;
        self.drying_power = drying_power;
        self
    }

    /// Resolve the index against the catalog
    pub fn resolve<'a>(&self, filaments: &'a [Filament]) -> Option<&'a Filament> {
        usize::try_from(self.filament_index)
            .ok()
            .and_then(|i| filaments.get(i))
    }
}

/// Print duration as entered: hours, minutes, seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintTime {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl PrintTime {
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Split a slicer estimate in seconds into h/m/s
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: (total / 3600) as f64,
            minutes: ((total % 3600) / 60) as f64,
            seconds: (total % 60) as f64,
        }
    }
}

/// A calculation as submitted from the form: the printer by id, the
/// filament lines by index into the filament list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub printer_id: Option<String>,
    pub filaments: Vec<SelectedFilament>,
    pub print_time: PrintTime,
}

/// Cost breakdown in the target currency, every value rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub filament_cost: f64,
    pub electricity_cost: f64,
    pub drying_cost: f64,
    pub usage_cost: f64,
    pub total_cost: f64,
    pub currency: Currency,
}

/// Profit and final price for a given total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub total_cost: f64,
    pub profit_percentage: f64,
    pub profit: f64,
    pub final_price: f64,
}

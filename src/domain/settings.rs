//! User settings
//!
//! Settings are stored as a single JSON blob. Fields added after the first
//! release carry serde defaults so older blobs keep loading.

use serde::{Deserialize, Serialize};

use super::types::{Currency, Language};

/// Electricity prices are entered in cents of the reference currency per kWh.
/// Dividing by this yields the reference currency.
pub const ELECTRICITY_UNITS_PER_CURRENCY: f64 = 100.0;

fn default_profit_percentage() -> f64 {
    30.0
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency for every computed amount
    pub currency: Currency,
    /// Electricity price in reference cents per kWh
    pub electricity_price: f64,
    #[serde(default)]
    pub language: Language,
    /// Profit margin pre-filled on new offers
    #[serde(default = "default_profit_percentage")]
    pub default_profit_percentage: f64,
    /// Printed on generated offers
    #[serde(default)]
    pub company_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::REFERENCE,
            electricity_price: 30.0,
            language: Language::En,
            default_profit_percentage: default_profit_percentage(),
            company_name: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_sensible_values() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Eur);
        assert_eq!(settings.electricity_price, 30.0);
        assert_eq!(settings.default_profit_percentage, 30.0);
    }

    #[test]
    fn older_blob_without_new_fields_still_loads() {
        let json = r#"{"currency":"HUF","electricity_price":12.5}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.currency, Currency::Huf);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.default_profit_percentage, 30.0);
    }
}

//! Fixed exchange-rate table
//!
//! Rates are "units of target currency per 1 EUR". The defaults are rounded
//! reference rates; `with_rate` lets the caller pin today's value.

use std::collections::HashMap;

use crate::domain::Currency;
use crate::ports::CurrencyConverter;

/// Default rates from the reference currency (EUR)
const DEFAULT_RATES: &[(Currency, f64)] = &[
    (Currency::Eur, 1.0),
    (Currency::Usd, 1.08),
    (Currency::Gbp, 0.85),
    (Currency::Huf, 395.0),
    (Currency::Chf, 0.94),
    (Currency::Pln, 4.30),
];

#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self {
            rates: DEFAULT_RATES.iter().copied().collect(),
        }
    }

    /// Override one rate. Non-positive or non-finite rates are ignored.
    pub fn with_rate(mut self, currency: Currency, rate: f64) -> Self {
        if rate.is_finite() && rate > 0.0 {
            self.rates.insert(currency, rate);
        } else {
            log::warn!("Ignoring invalid exchange rate {rate} for {currency}");
        }
        self
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyConverter for RateTable {
    fn convert(&self, amount: f64, target: Currency) -> f64 {
        match self.rate(target) {
            Some(rate) => amount * rate,
            None => {
                log::warn!("No exchange rate for {target}, amount left unconverted");
                amount
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_currency_is_identity() {
        assert_eq!(RateTable::new().convert(12.34, Currency::Eur), 12.34);
    }

    #[test]
    fn every_currency_has_a_default_rate() {
        let table = RateTable::new();
        for currency in Currency::ALL {
            assert!(table.rate(currency).is_some(), "{currency}");
        }
    }

    #[test]
    fn override_rate() {
        let table = RateTable::new().with_rate(Currency::Huf, 400.0);
        assert_eq!(table.convert(2.5, Currency::Huf), 1000.0);
    }

    #[test]
    fn invalid_override_is_ignored() {
        let table = RateTable::new()
            .with_rate(Currency::Usd, 0.0)
            .with_rate(Currency::Usd, f64::NAN);
        assert_eq!(table.rate(Currency::Usd), Some(1.08));
    }
}

//! Currency conversion port

use crate::domain::Currency;

/// Converts amounts from `Currency::REFERENCE` into a display currency.
///
/// Injected into the calculator so cost computation stays a pure function
/// of its arguments.
pub trait CurrencyConverter: Send + Sync {
    /// Convert `amount` (reference currency) into `target`
    fn convert(&self, amount: f64, target: Currency) -> f64;
}

//! Profit and final price

use super::costs::round2;
use crate::domain::PriceQuote;

/// `total * percentage / 100`, rounded to cents
pub fn calculate_profit(total_cost: f64, profit_percentage: f64) -> f64 {
    round2(total_cost * profit_percentage / 100.0)
}

/// `total + profit`, rounded to cents
pub fn calculate_final_price(total_cost: f64, profit: f64) -> f64 {
    round2(total_cost + profit)
}

/// Profit and final price for a total cost
pub fn quote(total_cost: f64, profit_percentage: f64) -> PriceQuote {
    let profit = calculate_profit(total_cost, profit_percentage);
    PriceQuote {
        total_cost,
        profit_percentage,
        profit,
        final_price: calculate_final_price(total_cost, profit),
    }
}

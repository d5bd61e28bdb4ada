//! Cost calculation
//!
//! - `costs`: the per-job breakdown (pure, converter injected)
//! - `pricing`: profit and final price on top of a total
//! - `validate`: localized reasons a breakdown can't be produced yet
//! - `offer`: freezing a breakdown into a customer offer

pub mod costs;
pub mod offer;
pub mod pricing;
pub mod validate;

pub use costs::{
    calculate_costs, drying_cost, electricity_cost, filament_cost, print_time_hours, round2,
    usage_cost,
};
pub use offer::build_offer;
pub use pricing::{calculate_final_price, calculate_profit, quote};
pub use validate::{settings_warnings, validate_inputs, validation_messages};

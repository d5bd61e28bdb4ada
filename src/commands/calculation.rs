//! Calculation commands
//!
//! `calculate_costs` returns `null` while the form is incomplete; the
//! frontend calls `validate_calculation` to show why.

use tauri::State;

use super::to_ipc;
use crate::calc;
use crate::domain::{CalculationRequest, CalculationResult, PriceQuote};
use crate::state::AppState;

#[tauri::command]
pub fn calculate_costs(
    state: State<'_, AppState>,
    request: CalculationRequest,
) -> Result<Option<CalculationResult>, String> {
    to_ipc(state.calculate(&request))
}

#[tauri::command]
pub fn validate_calculation(
    state: State<'_, AppState>,
    request: CalculationRequest,
) -> Result<Vec<String>, String> {
    to_ipc(state.validate(&request))
}

#[tauri::command]
pub fn quote_price(total_cost: f64, profit_percentage: f64) -> PriceQuote {
    calc::quote(total_cost, profit_percentage)
}

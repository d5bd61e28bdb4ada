//! Offer commands

use tauri::{AppHandle, Emitter, State};

use super::to_ipc;
use crate::domain::{Offer, OfferRequest};
use crate::state::AppState;

#[tauri::command]
pub fn list_offers(state: State<'_, AppState>) -> Result<Vec<Offer>, String> {
    to_ipc(state.offers())
}

#[tauri::command]
pub fn create_offer(
    app: AppHandle,
    state: State<'_, AppState>,
    request: OfferRequest,
) -> Result<Offer, String> {
    let offer = to_ipc(state.create_offer(&request))?;
    // Lets an open offers list refresh without polling
    let _ = app.emit("offer-created", &offer);
    Ok(offer)
}

#[tauri::command]
pub fn delete_offer(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    to_ipc(state.delete_offer(&id))
}

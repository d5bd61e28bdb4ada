//! Settings commands

use tauri::State;

use super::to_ipc;
use crate::domain::Settings;
use crate::state::AppState;

#[tauri::command]
pub fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    to_ipc(state.settings())
}

#[tauri::command]
pub fn save_settings(state: State<'_, AppState>, settings: Settings) -> Result<(), String> {
    to_ipc(state.update_settings(settings))
}

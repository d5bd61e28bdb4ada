//! Printer and filament catalog commands

use tauri::State;

use super::to_ipc;
use crate::domain::{Filament, Printer};
use crate::state::AppState;

#[tauri::command]
pub fn list_printers(state: State<'_, AppState>) -> Result<Vec<Printer>, String> {
    to_ipc(state.printers())
}

#[tauri::command]
pub fn save_printer(state: State<'_, AppState>, printer: Printer) -> Result<Printer, String> {
    to_ipc(state.save_printer(printer))
}

#[tauri::command]
pub fn delete_printer(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    to_ipc(state.delete_printer(&id))
}

#[tauri::command]
pub fn list_filaments(state: State<'_, AppState>) -> Result<Vec<Filament>, String> {
    to_ipc(state.filaments())
}

#[tauri::command]
pub fn save_filament(state: State<'_, AppState>, filament: Filament) -> Result<Filament, String> {
    to_ipc(state.save_filament(filament))
}

#[tauri::command]
pub fn delete_filament(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    to_ipc(state.delete_filament(&id))
}

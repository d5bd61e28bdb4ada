//! PrintQuote
//!
//! A desktop application for 3D-printing businesses: catalog printers and
//! filaments, compute per-job costs, and turn them into customer offers.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `ports/` - Trait definitions for exchange rates and local storage
//! - `calc/` - Cost calculation (pure functions, converter injected)
//! - `import/` - Slicer file parsing (pure functions, no I/O)
//! - `catalog` - Typed persistence of printers, filaments, offers, settings
//! - `adapters/` - Implementations of ports (rate table, JSON files, memory)
//! - `commands/` - Tauri command handlers (driving adapters)
//! - `state` - Application state management

// Core domain (pure, no I/O)
pub mod calc;
pub mod domain;
pub mod i18n;
pub mod import;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;
pub mod catalog;

// Tauri integration
#[cfg(feature = "desktop")]
pub mod commands;
#[cfg(feature = "desktop")]
pub mod menu;
pub mod state;

#[cfg(feature = "desktop")]
use state::AppState;

/// Environment override for the store directory
pub const DATA_DIR_ENV: &str = "PRINTQUOTE_DATA_DIR";
/// Set to `1` to keep everything in memory
pub const MEMORY_STORE_ENV: &str = "PRINTQUOTE_MEMORY_STORE";

/// Initialise `env_logger` once; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("printquote_lib=info"),
    )
    .try_init();
}

#[cfg(feature = "desktop")]
fn open_store(
    app: &tauri::App,
) -> Result<Box<dyn ports::KeyValueStore>, Box<dyn std::error::Error>> {
    use tauri::Manager;

    if std::env::var(MEMORY_STORE_ENV).is_ok_and(|v| v == "1") {
        return Ok(Box::new(adapters::MemoryStore::new()));
    }
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => std::path::PathBuf::from(dir),
        None => app.path().app_data_dir()?.join("store"),
    };
    Ok(Box::new(adapters::JsonFileStore::open(dir)?))
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let store = open_store(app)?;
            app.manage(AppState::new(store));
            menu::setup_menu(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Settings commands
            commands::settings::get_settings,
            commands::settings::save_settings,
            // Catalog commands
            commands::catalog::list_printers,
            commands::catalog::save_printer,
            commands::catalog::delete_printer,
            commands::catalog::list_filaments,
            commands::catalog::save_filament,
            commands::catalog::delete_filament,
            // Calculation commands
            commands::calculation::calculate_costs,
            commands::calculation::validate_calculation,
            commands::calculation::quote_price,
            // Import command
            commands::import::import_slicer_file,
            // Offer commands
            commands::offers::list_offers,
            commands::offers::create_offer,
            commands::offers::delete_offer,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

//! Native menu bar setup
//!
//! Creates the application menu bar with File, Offers and Help menus.
//! Menu events are emitted to the frontend for handling.

use tauri::{
    menu::{MenuBuilder, MenuItemBuilder, SubmenuBuilder},
    App, Emitter,
};

/// Menu event payload sent to frontend
#[derive(Clone, serde::Serialize)]
pub struct MenuEvent {
    pub id: String,
}

/// Set up the application menu bar
pub fn setup_menu(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let handle = app.handle();

    // Build File menu
    let import_item = MenuItemBuilder::with_id("import_slicer_file", "Import Slicer File...")
        .accelerator("CmdOrCtrl+O")
        .build(handle)?;

    let settings_item = MenuItemBuilder::with_id("settings", "Settings...")
        .accelerator("CmdOrCtrl+,")
        .build(handle)?;

    let file_menu = SubmenuBuilder::new(handle, "File")
        .item(&import_item)
        .separator()
        .item(&settings_item)
        .separator()
        .quit()
        .build()?;

    // Build Offers menu
    let new_offer = MenuItemBuilder::with_id("offer_new", "New Offer")
        .accelerator("CmdOrCtrl+N")
        .build(handle)?;

    let show_offers = MenuItemBuilder::with_id("offer_list", "Show Offers").build(handle)?;

    let offers_menu = SubmenuBuilder::new(handle, "Offers")
        .item(&new_offer)
        .item(&show_offers)
        .build()?;

    // Build Help menu
    let about = MenuItemBuilder::with_id("about", "About PrintQuote").build(handle)?;

    let help_menu = SubmenuBuilder::new(handle, "Help").item(&about).build()?;

    let menu = MenuBuilder::new(handle)
        .item(&file_menu)
        .item(&offers_menu)
        .item(&help_menu)
        .build()?;

    app.set_menu(menu)?;

    app.on_menu_event(move |app_handle, event| {
        let id = event.id().0.clone();
        log::debug!("Menu event: {id}");

        let _ = app_handle.emit("menu-event", MenuEvent { id: id.clone() });

        if id == "quit" {
            app_handle.exit(0);
        }
    });

    Ok(())
}

//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
use anyhow::Context;
#[cfg(feature = "tauri")]
use stockroom_desktop::commands::*;

#[cfg(feature = "tauri")]
fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = stockroom_infra::AppConfig::default();
    tracing::info!(csv_path = %config.csv_path.display(), "starting inventory window");

    let state = AppState::new(stockroom_desktop::InventoryApp::new(&config));

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            add_item,
            delete_item,
            update_item,
            search_items,
            sort_items,
            save_inventory,
            load_inventory,
            refresh_view,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build -p stockroom-desktop --features tauri");
    std::process::exit(1);
}

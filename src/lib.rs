mod commands;
pub mod csv_import;
pub mod events;
pub mod export;
pub mod models;
pub mod popups;
pub mod search;
pub mod store;

pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // CSV import
            commands::import::import_facts_csv,
            commands::import::import_facts_csv_file,
            commands::import::import_conversations_csv,
            commands::import::import_conversations_csv_file,
            // Feed
            commands::feed::get_facts_page,
            commands::feed::set_category_filter,
            commands::feed::get_categories,
            commands::feed::toggle_like,
            commands::feed::toggle_favorite,
            commands::feed::archive_fact,
            commands::feed::paste_facts,
            commands::feed::get_feed_stats,
            // Popups
            commands::popups::next_popup,
            commands::popups::set_popups_enabled,
            // Search
            commands::search::build_fact_search_url,
            // Export
            commands::export::export_favorites,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

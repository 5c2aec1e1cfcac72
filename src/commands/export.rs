//! Favorites export command for Tauri

use serde::{Deserialize, Serialize};
use std::fs;
use tauri::command;

use crate::export::render_favorites_report;
use crate::store;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesExportResult {
    pub path: String,
    pub facts_exported: usize,
}

/// Write the favorites report to a caller-chosen path.
#[command]
pub fn export_favorites(path: String) -> Result<FavoritesExportResult, String> {
    let (content, count) = {
        let store = store::STORE.lock().map_err(|e| e.to_string())?;
        let content = render_favorites_report(store.favorites()).map_err(|e| e.to_string())?;
        (content, store.favorites().len())
    };

    fs::write(&path, content).map_err(|e| e.to_string())?;
    log::info!("Exported {} favorites to {}", count, path);

    Ok(FavoritesExportResult {
        path,
        facts_exported: count,
    })
}

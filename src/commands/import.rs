//! CSV import commands for Tauri
//!
//! Text-based variants take content the frontend already has (clipboard,
//! drag-and-drop); file-based variants read the file here. Both feed the
//! pure parsers in `csv_import` and prepend the results to the store.

use serde::{Deserialize, Serialize};
use std::fs;
use tauri::{command, AppHandle};

use crate::csv_import::{self, ImportOptions};
use crate::events::{emit_data_changed, DataChangedPayload};
use crate::store;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub rows_imported: usize,
    /// Data rows dropped for not covering both required columns.
    pub rows_skipped: usize,
    /// Distinct categories among the imported records (facts only).
    pub categories: Vec<String>,
}

// ============================================================================
// Fact import
// ============================================================================

/// Import fact records from raw CSV text.
#[command]
pub fn import_facts_csv(
    app: AppHandle,
    text: String,
    options: Option<ImportOptions>,
) -> Result<ImportSummary, String> {
    let options = options.unwrap_or_default();
    let facts = csv_import::parse_facts_csv(&text, options).map_err(|e| e.to_string())?;

    let rows_imported = facts.len();
    let rows_skipped = csv_import::data_row_count(&text) - rows_imported;

    let mut categories: Vec<String> = Vec::new();
    for fact in &facts {
        if !categories.contains(&fact.category) {
            categories.push(fact.category.clone());
        }
    }

    {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.add_facts(facts);
    }

    log::info!("CSV import: added {} facts", rows_imported);
    emit_data_changed(
        &app,
        DataChangedPayload::facts_imported(rows_imported, categories.clone()),
    );

    Ok(ImportSummary {
        rows_imported,
        rows_skipped,
        categories,
    })
}

/// Import fact records from a CSV file on disk.
#[command]
pub fn import_facts_csv_file(
    app: AppHandle,
    path: String,
    options: Option<ImportOptions>,
) -> Result<ImportSummary, String> {
    let text = fs::read_to_string(&path).map_err(|e| e.to_string())?;
    import_facts_csv(app, text, options)
}

// ============================================================================
// Conversation import
// ============================================================================

/// Import bilingual conversation pairs from raw CSV text.
#[command]
pub fn import_conversations_csv(
    app: AppHandle,
    text: String,
    options: Option<ImportOptions>,
) -> Result<ImportSummary, String> {
    let options = options.unwrap_or_default();
    let pairs = csv_import::parse_conversations_csv(&text, options).map_err(|e| e.to_string())?;

    let rows_imported = pairs.len();
    let rows_skipped = csv_import::data_row_count(&text) - rows_imported;

    {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.add_conversations(pairs);
    }

    log::info!("CSV import: added {} conversation pairs", rows_imported);
    emit_data_changed(&app, DataChangedPayload::conversations_imported(rows_imported));

    Ok(ImportSummary {
        rows_imported,
        rows_skipped,
        categories: Vec::new(),
    })
}

/// Import bilingual conversation pairs from a CSV file on disk.
#[command]
pub fn import_conversations_csv_file(
    app: AppHandle,
    path: String,
    options: Option<ImportOptions>,
) -> Result<ImportSummary, String> {
    let text = fs::read_to_string(&path).map_err(|e| e.to_string())?;
    import_conversations_csv(app, text, options)
}

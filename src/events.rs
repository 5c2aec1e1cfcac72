//! Tauri event types for notifying the frontend of data changes.
//!
//! When backend operations modify the feed (imports, likes, archiving),
//! emit these events so the frontend can refresh its view.

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter};

/// Event name constant
pub const DATA_CHANGED_EVENT: &str = "data_changed";

/// Payload for data change events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataChangedPayload {
    /// The entity type that changed ("fact" or "conversation")
    pub entity: String,
    /// The action that occurred (e.g. "imported", "liked", "archived")
    pub action: String,
    /// Optional: number of records affected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Optional: categories touched by the change (for filter rebuilds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl DataChangedPayload {
    /// Facts arrived through CSV import or clipboard paste.
    pub fn facts_imported(count: usize, categories: Vec<String>) -> Self {
        Self {
            entity: "fact".to_string(),
            action: "imported".to_string(),
            count: Some(count),
            categories: if categories.is_empty() {
                None
            } else {
                Some(categories)
            },
        }
    }

    /// Conversation pairs arrived through CSV import.
    pub fn conversations_imported(count: usize) -> Self {
        Self {
            entity: "conversation".to_string(),
            action: "imported".to_string(),
            count: Some(count),
            categories: None,
        }
    }

    /// A single fact changed state ("liked", "unliked", "favorited",
    /// "unfavorited", "archived").
    pub fn fact_updated(action: &str) -> Self {
        Self {
            entity: "fact".to_string(),
            action: action.to_string(),
            count: None,
            categories: None,
        }
    }
}

/// Emit a data changed event to the frontend
pub fn emit_data_changed(app: &AppHandle, payload: DataChangedPayload) {
    if let Err(e) = app.emit(DATA_CHANGED_EVENT, payload) {
        log::warn!("Failed to emit data_changed event: {}", e);
    }
}

//! Fact feed commands for Tauri
//!
//! Paging, filtering and per-fact toggles over the in-memory store.

use tauri::{command, AppHandle};

use crate::events::{emit_data_changed, DataChangedPayload};
use crate::models::{Fact, FactCard, FeedStats};
use crate::store::{self, CategoryFilter};

/// Next page of cards under the current filter.
#[command]
pub fn get_facts_page() -> Result<Vec<FactCard>, String> {
    let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
    Ok(store.next_batch())
}

/// Switch the feed filter ("all", "none", "favorites", "liked" or a
/// category name) and return the first page of the new projection.
#[command]
pub fn set_category_filter(value: String) -> Result<Vec<FactCard>, String> {
    let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
    store.set_filter(CategoryFilter::from_value(&value));
    Ok(store.next_batch())
}

/// Distinct categories currently in the feed, first-seen order.
#[command]
pub fn get_categories() -> Result<Vec<String>, String> {
    let store = store::STORE.lock().map_err(|e| e.to_string())?;
    Ok(store.categories())
}

/// Toggle like state for a fact. Returns the new state.
#[command]
pub fn toggle_like(app: AppHandle, fact: Fact) -> Result<bool, String> {
    let liked = {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.toggle_like(&fact)
    };
    emit_data_changed(
        &app,
        DataChangedPayload::fact_updated(if liked { "liked" } else { "unliked" }),
    );
    Ok(liked)
}

/// Toggle favorite state for a fact. Returns the new state.
#[command]
pub fn toggle_favorite(app: AppHandle, fact: Fact) -> Result<bool, String> {
    let favorited = {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.toggle_favorite(&fact)
    };
    emit_data_changed(
        &app,
        DataChangedPayload::fact_updated(if favorited { "favorited" } else { "unfavorited" }),
    );
    Ok(favorited)
}

/// Move a fact into the archive category. Returns false when the fact
/// was not found (e.g. already archived).
#[command]
pub fn archive_fact(app: AppHandle, fact: Fact) -> Result<bool, String> {
    let archived = {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.archive(&fact)
    };
    if archived {
        emit_data_changed(&app, DataChangedPayload::fact_updated("archived"));
    }
    Ok(archived)
}

/// Turn clipboard text into facts in the PASTED category. Fails when no
/// usable sentences are found, so the frontend can tell the user.
#[command]
pub fn paste_facts(app: AppHandle, text: String) -> Result<usize, String> {
    let count = {
        let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
        store.paste_text(&text)
    };
    if count == 0 {
        return Err("No valid facts found in clipboard text".to_string());
    }

    log::info!("Clipboard paste: added {} facts", count);
    emit_data_changed(
        &app,
        DataChangedPayload::facts_imported(count, vec![crate::models::PASTED_CATEGORY.to_string()]),
    );
    Ok(count)
}

/// Counters for the sidebar summary.
#[command]
pub fn get_feed_stats() -> Result<FeedStats, String> {
    let store = store::STORE.lock().map_err(|e| e.to_string())?;
    Ok(store.stats())
}

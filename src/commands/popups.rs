//! Popup commands for Tauri
//!
//! The frontend owns the popup timers; it calls `next_popup` whenever
//! one fires and renders whatever comes back.

use tauri::command;

use crate::popups::{self, PopupPayload};
use crate::store;

/// Pick the next popup payload. `None` while popups are disabled or the
/// store has nothing to show.
#[command]
pub fn next_popup() -> Result<Option<PopupPayload>, String> {
    let store = store::STORE.lock().map_err(|e| e.to_string())?;
    if !store.popups_enabled() {
        return Ok(None);
    }
    Ok(popups::next_popup(store.facts(), store.conversations()))
}

/// Flip the popup toggle. Returns the new state.
#[command]
pub fn set_popups_enabled(enabled: bool) -> Result<bool, String> {
    let mut store = store::STORE.lock().map_err(|e| e.to_string())?;
    store.set_popups_enabled(enabled);
    Ok(enabled)
}

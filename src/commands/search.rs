//! Search link command for Tauri

use tauri::command;

use crate::search::{build_search_url, SearchEngine};

/// Build the web-search URL for a fact card click. The frontend opens
/// the returned URL itself.
#[command]
pub fn build_fact_search_url(
    engine: String,
    fact_text: String,
    modifier: Option<String>,
    custom_url: Option<String>,
) -> Result<String, String> {
    build_search_url(
        SearchEngine::from_value(&engine),
        &fact_text,
        modifier.as_deref(),
        custom_url.as_deref(),
    )
    .map_err(|e| e.to_string())
}

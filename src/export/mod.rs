//! Favorites export as a plain-text report.

use chrono::Local;
use thiserror::Error;

use crate::models::Fact;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No favorites to download")]
    NoFavorites,
}

/// Render the favorites report with today's local date in the footer.
pub fn render_favorites_report(favorites: &[Fact]) -> Result<String, ExportError> {
    render_with_date(favorites, &Local::now().format("%m/%d/%Y").to_string())
}

fn render_with_date(favorites: &[Fact], date: &str) -> Result<String, ExportError> {
    if favorites.is_empty() {
        return Err(ExportError::NoFavorites);
    }

    let mut content = String::from("MY FAVORITE FACTS\n");
    content.push_str("==================\n\n");

    for (index, fact) in favorites.iter().enumerate() {
        content.push_str(&format!("{}. [{}]\n", index + 1, fact.category));
        content.push_str(&format!("{}\n\n", fact.fact));
    }

    content.push_str(&format!("Total favorites: {}\n", favorites.len()));
    content.push_str(&format!("Downloaded on: {}", date));

    Ok(content)
}

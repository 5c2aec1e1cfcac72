//! Search link building for fact cards.
//!
//! Clicking a card opens a web search for the fact text; the user picks
//! the engine and may prefix an extra search modifier. Opening the URL is
//! the frontend's job, this module only builds it.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
    DuckDuckGo,
    Yahoo,
    Yandex,
    Baidu,
    Custom,
}

impl SearchEngine {
    /// Map the selector value from the frontend. Unknown values fall
    /// back to Google, matching the original widget.
    pub fn from_value(value: &str) -> Self {
        match value {
            "bing" => Self::Bing,
            "duckduckgo" => Self::DuckDuckGo,
            "yahoo" => Self::Yahoo,
            "yandex" => Self::Yandex,
            "baidu" => Self::Baidu,
            "custom" => Self::Custom,
            _ => Self::Google,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a custom search URL first")]
    MissingCustomUrl,
}

/// Build the search URL for a fact.
///
/// The modifier, when non-blank, is prefixed to the fact text before
/// encoding. Custom engines substitute the encoded query for the literal
/// `{query}` placeholder in the user-supplied template.
pub fn build_search_url(
    engine: SearchEngine,
    fact_text: &str,
    modifier: Option<&str>,
    custom_url: Option<&str>,
) -> Result<String, SearchError> {
    let modifier = modifier.map(str::trim).unwrap_or("");
    let query = if modifier.is_empty() {
        fact_text.to_string()
    } else {
        format!("{} {}", modifier, fact_text)
    };
    let encoded = urlencoding::encode(&query);

    let url = match engine {
        SearchEngine::Google => format!("https://www.google.com/search?q={}", encoded),
        SearchEngine::Bing => format!("https://www.bing.com/search?q={}", encoded),
        SearchEngine::DuckDuckGo => format!("https://duckduckgo.com/?q={}", encoded),
        SearchEngine::Yahoo => format!("https://search.yahoo.com/search?p={}", encoded),
        SearchEngine::Yandex => format!("https://yandex.com/search/?text={}", encoded),
        SearchEngine::Baidu => format!("https://www.baidu.com/s?wd={}", encoded),
        SearchEngine::Custom => {
            let template = custom_url.map(str::trim).unwrap_or("");
            if template.is_empty() {
                return Err(SearchError::MissingCustomUrl);
            }
            template.replace("{query}", &encoded)
        }
    };

    Ok(url)
}

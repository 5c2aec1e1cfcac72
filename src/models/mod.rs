use serde::{Deserialize, Serialize};

/// Category assigned to facts the user marks as already known.
pub const ARCHIVE_CATEGORY: &str = "I KNOW THAT JACK";

/// Category assigned to facts created from pasted clipboard text.
pub const PASTED_CATEGORY: &str = "PASTED";

/// A single feed entry. Duplicates are permitted; identity for
/// like/favorite purposes is the fact text alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    /// Upper-cased category label, e.g. "ANIMALS".
    pub category: String,
    pub fact: String,
}

impl Fact {
    pub fn new(category: impl Into<String>, fact: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            fact: fact.into(),
        }
    }
}

/// A bilingual phrase pair shown in conversation popups. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPair {
    pub english: String,
    pub spanish: String,
}

/// A fact decorated with the per-user flags the renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCard {
    #[serde(flatten)]
    pub fact: Fact,
    pub liked: bool,
    pub favorited: bool,
}

/// Counters for the sidebar summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStats {
    pub total_facts: usize,
    pub total_conversations: usize,
    pub favorites: usize,
    pub liked: usize,
}

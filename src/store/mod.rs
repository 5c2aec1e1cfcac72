//! In-memory application state for the fact feed.
//!
//! There is no persistence layer; the store lives for the duration of the
//! app process and is reachable from every command through a global
//! mutex, the same way the database connection is held in comparable
//! apps. Like/favorite membership and archive lookups use the original
//! widget's identity rules: likes and favorites match on fact text alone,
//! archiving matches on text and category.

mod seed;

use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    ConversationPair, Fact, FactCard, FeedStats, ARCHIVE_CATEGORY, PASTED_CATEGORY,
};

/// Number of cards handed out per feed page.
const BATCH_SIZE: usize = 5;

/// Minimum trimmed length for a pasted sentence to become a fact.
const MIN_PASTED_SENTENCE_LEN: usize = 10;

/// Sentence boundaries for clipboard text: end-of-sentence punctuation
/// followed by whitespace, or any line break run.
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+|[\r\n]+").expect("invalid sentence split regex"));

/// Global store instance, seeded with the built-in fact list.
pub static STORE: Lazy<Mutex<FactStore>> = Lazy::new(|| Mutex::new(FactStore::with_seed()));

/// Active feed projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Default on startup: show nothing until the user picks something.
    None,
    All,
    Favorites,
    Liked,
    Category(String),
}

impl CategoryFilter {
    /// Map the raw selector value coming from the frontend.
    pub fn from_value(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "all" => Self::All,
            "favorites" => Self::Favorites,
            "liked" => Self::Liked,
            other => Self::Category(other.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct FactStore {
    facts: Vec<Fact>,
    conversations: Vec<ConversationPair>,
    favorites: Vec<Fact>,
    liked: Vec<Fact>,
    filter: CategoryFilter,
    cursor: usize,
    popups_enabled: bool,
}

impl FactStore {
    pub fn new() -> Self {
        Self {
            facts: Vec::new(),
            conversations: Vec::new(),
            favorites: Vec::new(),
            liked: Vec::new(),
            filter: CategoryFilter::None,
            cursor: 0,
            popups_enabled: false,
        }
    }

    pub fn with_seed() -> Self {
        let mut store = Self::new();
        store.facts = seed::seed_facts();
        store
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn conversations(&self) -> &[ConversationPair] {
        &self.conversations
    }

    pub fn favorites(&self) -> &[Fact] {
        &self.favorites
    }

    pub fn popups_enabled(&self) -> bool {
        self.popups_enabled
    }

    pub fn set_popups_enabled(&mut self, enabled: bool) {
        self.popups_enabled = enabled;
    }

    /// Switch the feed projection and rewind paging.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    /// The facts visible under the current filter, in feed order.
    fn filtered(&self) -> Vec<&Fact> {
        match &self.filter {
            CategoryFilter::None => Vec::new(),
            CategoryFilter::All => self.facts.iter().collect(),
            CategoryFilter::Favorites => self.favorites.iter().collect(),
            CategoryFilter::Liked => self.liked.iter().collect(),
            CategoryFilter::Category(name) => self
                .facts
                .iter()
                .filter(|f| f.category == *name)
                .collect(),
        }
    }

    /// Next page of cards for infinite scrolling. Returns an empty vec
    /// once the current projection is exhausted.
    pub fn next_batch(&mut self) -> Vec<FactCard> {
        let filtered = self.filtered();
        if self.cursor >= filtered.len() {
            return Vec::new();
        }

        let end = (self.cursor + BATCH_SIZE).min(filtered.len());
        let cards: Vec<FactCard> = filtered[self.cursor..end]
            .iter()
            .map(|fact| FactCard {
                liked: self.liked.iter().any(|l| l.fact == fact.fact),
                favorited: self.favorites.iter().any(|f| f.fact == fact.fact),
                fact: (*fact).clone(),
            })
            .collect();

        self.cursor = end;
        cards
    }

    /// Toggle like membership for a fact. Returns true when the fact is
    /// liked after the call.
    pub fn toggle_like(&mut self, fact: &Fact) -> bool {
        if let Some(pos) = self.liked.iter().position(|l| l.fact == fact.fact) {
            self.liked.remove(pos);
            false
        } else {
            self.liked.push(fact.clone());
            true
        }
    }

    /// Toggle favorite membership for a fact. Returns true when the fact
    /// is favorited after the call.
    pub fn toggle_favorite(&mut self, fact: &Fact) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f.fact == fact.fact) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(fact.clone());
            true
        }
    }

    /// Move a fact into the fixed archive category. The only in-place
    /// mutation a fact ever sees. Returns false when no fact matches.
    pub fn archive(&mut self, fact: &Fact) -> bool {
        match self
            .facts
            .iter_mut()
            .find(|f| f.fact == fact.fact && f.category == fact.category)
        {
            Some(found) => {
                found.category = ARCHIVE_CATEGORY.to_string();
                true
            }
            None => false,
        }
    }

    /// Prepend freshly imported facts and rewind paging.
    pub fn add_facts(&mut self, imported: Vec<Fact>) {
        self.facts.splice(0..0, imported);
        self.cursor = 0;
    }

    /// Prepend freshly imported conversation pairs.
    pub fn add_conversations(&mut self, imported: Vec<ConversationPair>) {
        self.conversations.splice(0..0, imported);
    }

    /// Distinct categories in first-seen feed order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for fact in &self.facts {
            if !seen.contains(&fact.category) {
                seen.push(fact.category.clone());
            }
        }
        seen
    }

    /// Split clipboard text into sentences and add each sufficiently
    /// long one as a fact in the PASTED category. Switches the filter to
    /// that category. Returns how many facts were added.
    pub fn paste_text(&mut self, text: &str) -> usize {
        let pasted: Vec<Fact> = SENTENCE_SPLIT
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_PASTED_SENTENCE_LEN)
            .map(|s| Fact::new(PASTED_CATEGORY, s))
            .collect();

        let count = pasted.len();
        if count > 0 {
            self.facts.splice(0..0, pasted);
            self.set_filter(CategoryFilter::Category(PASTED_CATEGORY.to_string()));
        }
        count
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats {
            total_facts: self.facts.len(),
            total_conversations: self.conversations.len(),
            favorites: self.favorites.len(),
            liked: self.liked.len(),
        }
    }
}

impl Default for FactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(facts: Vec<Fact>) -> FactStore {
        let mut store = FactStore::new();
        store.add_facts(facts);
        store
    }

    fn sample_facts(n: usize) -> Vec<Fact> {
        (0..n)
            .map(|i| Fact::new("ANIMALS", format!("fact number {}", i)))
            .collect()
    }

    #[test]
    fn test_default_filter_shows_nothing() {
        let mut store = store_with(sample_facts(3));
        assert!(store.next_batch().is_empty());
    }

    #[test]
    fn test_next_batch_pages_in_batches_of_five() {
        let mut store = store_with(sample_facts(7));
        store.set_filter(CategoryFilter::All);

        let first = store.next_batch();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].fact.fact, "fact number 0");

        let second = store.next_batch();
        assert_eq!(second.len(), 2);
        assert_eq!(second[1].fact.fact, "fact number 6");

        assert!(store.next_batch().is_empty());
    }

    #[test]
    fn test_set_filter_rewinds_paging() {
        let mut store = store_with(sample_facts(7));
        store.set_filter(CategoryFilter::All);
        store.next_batch();

        store.set_filter(CategoryFilter::All);
        assert_eq!(store.next_batch()[0].fact.fact, "fact number 0");
    }

    #[test]
    fn test_category_filter_matches_exact_category() {
        let mut store = store_with(vec![
            Fact::new("SPACE", "Venus spins backwards"),
            Fact::new("ANIMALS", "Cats sleep a lot"),
        ]);
        store.set_filter(CategoryFilter::Category("SPACE".to_string()));

        let batch = store.next_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].fact.category, "SPACE");
    }

    #[test]
    fn test_toggle_like_roundtrip() {
        let fact = Fact::new("ANIMALS", "Cats sleep a lot");
        let mut store = store_with(vec![fact.clone()]);

        assert!(store.toggle_like(&fact));
        assert_eq!(store.stats().liked, 1);
        assert!(!store.toggle_like(&fact));
        assert_eq!(store.stats().liked, 0);
    }

    #[test]
    fn test_toggle_favorite_matches_on_fact_text_only() {
        let fact = Fact::new("ANIMALS", "Cats sleep a lot");
        let mut store = store_with(vec![fact.clone()]);

        assert!(store.toggle_favorite(&fact));
        // Same text, different category still toggles it off.
        let relabeled = Fact::new("OTHER", "Cats sleep a lot");
        assert!(!store.toggle_favorite(&relabeled));
        assert_eq!(store.stats().favorites, 0);
    }

    #[test]
    fn test_liked_cards_carry_flags() {
        let fact = Fact::new("ANIMALS", "Cats sleep a lot");
        let mut store = store_with(vec![fact.clone()]);
        store.toggle_like(&fact);
        store.set_filter(CategoryFilter::All);

        let batch = store.next_batch();
        assert!(batch[0].liked);
        assert!(!batch[0].favorited);
    }

    #[test]
    fn test_archive_rewrites_category() {
        let fact = Fact::new("ANIMALS", "Cats sleep a lot");
        let mut store = store_with(vec![fact.clone()]);

        assert!(store.archive(&fact));
        store.set_filter(CategoryFilter::Category(ARCHIVE_CATEGORY.to_string()));
        let batch = store.next_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].fact.category, ARCHIVE_CATEGORY);

        // Already moved; the original (category, text) pair no longer exists.
        assert!(!store.archive(&fact));
    }

    #[test]
    fn test_add_facts_prepends() {
        let mut store = store_with(vec![Fact::new("OLD", "an old fact")]);
        store.add_facts(vec![
            Fact::new("NEW", "first new fact"),
            Fact::new("NEW", "second new fact"),
        ]);
        store.set_filter(CategoryFilter::All);

        let batch = store.next_batch();
        assert_eq!(batch[0].fact.fact, "first new fact");
        assert_eq!(batch[1].fact.fact, "second new fact");
        assert_eq!(batch[2].fact.fact, "an old fact");
    }

    #[test]
    fn test_categories_first_seen_order() {
        let store = store_with(vec![
            Fact::new("SPACE", "one"),
            Fact::new("ANIMALS", "two"),
            Fact::new("SPACE", "three"),
        ]);
        assert_eq!(store.categories(), vec!["SPACE", "ANIMALS"]);
    }

    #[test]
    fn test_paste_text_splits_sentences_and_filters_short_ones() {
        let mut store = FactStore::new();
        let count = store.paste_text(
            "The Eiffel Tower grows in summer. Too short. Bananas are naturally radioactive!\nWombats produce cube-shaped droppings",
        );

        assert_eq!(count, 3);
        let batch = store.next_batch();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|c| c.fact.category == PASTED_CATEGORY));
        assert_eq!(batch[0].fact.fact, "The Eiffel Tower grows in summer");
    }

    #[test]
    fn test_paste_text_with_no_usable_sentences() {
        let mut store = FactStore::new();
        assert_eq!(store.paste_text("short. tiny! no"), 0);
        // Filter untouched: still the default.
        assert!(store.next_batch().is_empty());
    }

    #[test]
    fn test_filter_value_mapping() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("none"), CategoryFilter::None);
        assert_eq!(
            CategoryFilter::from_value("favorites"),
            CategoryFilter::Favorites
        );
        assert_eq!(CategoryFilter::from_value("liked"), CategoryFilter::Liked);
        assert_eq!(
            CategoryFilter::from_value("SPACE"),
            CategoryFilter::Category("SPACE".to_string())
        );
    }
}

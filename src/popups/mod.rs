//! Random popup payload selection.
//!
//! The backend only decides WHAT a popup shows; when and how it appears
//! is the frontend's concern. A conversation popup is chosen with
//! probability 0.4 whenever any conversation pairs are loaded, otherwise
//! a random fact is dressed up with one of the fixed title variants.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ConversationPair, Fact};

/// Chance of showing a conversation popup when pairs are available.
const CONVERSATION_WEIGHT: f64 = 0.4;

/// The fixed title/icon variants for fact popups.
const FACT_POPUP_VARIANTS: &[(&str, &str)] = &[
    ("💡 Did You Know?", "💡"),
    ("🤯 Mind = Blown", "🤯"),
    ("📚 Random Fact Alert!", "📚"),
    ("🧠 Brain Food", "🧠"),
    ("⚡ Fact Flash!", "⚡"),
];

/// What the frontend should render in the next popup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PopupPayload {
    #[serde(rename_all = "camelCase")]
    Fact {
        title: String,
        icon: String,
        fact: Fact,
    },
    #[serde(rename_all = "camelCase")]
    Conversation { pair: ConversationPair },
}

/// Pick the next popup payload, or `None` when there is nothing to show.
pub fn next_popup(facts: &[Fact], conversations: &[ConversationPair]) -> Option<PopupPayload> {
    pick(facts, conversations, &mut rand::rng())
}

fn pick<R: Rng>(
    facts: &[Fact],
    conversations: &[ConversationPair],
    rng: &mut R,
) -> Option<PopupPayload> {
    let show_conversation =
        !conversations.is_empty() && rng.random::<f64>() < CONVERSATION_WEIGHT;

    if show_conversation {
        let pair = conversations[rng.random_range(0..conversations.len())].clone();
        return Some(PopupPayload::Conversation { pair });
    }

    if facts.is_empty() {
        return None;
    }
    let fact = facts[rng.random_range(0..facts.len())].clone();
    let (title, icon) = FACT_POPUP_VARIANTS[rng.random_range(0..FACT_POPUP_VARIANTS.len())];

    Some(PopupPayload::Fact {
        title: title.to_string(),
        icon: icon.to_string(),
        fact,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn facts() -> Vec<Fact> {
        vec![
            Fact::new("ANIMALS", "Cats sleep a lot"),
            Fact::new("SPACE", "Venus spins backwards"),
        ]
    }

    fn pairs() -> Vec<ConversationPair> {
        vec![ConversationPair {
            english: "Good morning".to_string(),
            spanish: "Buenos días".to_string(),
        }]
    }

    #[test]
    fn test_empty_store_yields_no_popup() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick(&[], &[], &mut rng).is_none());
    }

    #[test]
    fn test_without_conversations_always_picks_a_fact() {
        let facts = facts();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            match pick(&facts, &[], &mut rng) {
                Some(PopupPayload::Fact { title, icon, .. }) => {
                    assert!(!title.is_empty());
                    assert!(!icon.is_empty());
                }
                other => panic!("expected a fact popup, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_conversation_weight_is_respected() {
        let facts = facts();
        let pairs = pairs();
        let mut rng = StdRng::seed_from_u64(3);

        let mut conversation_count = 0;
        for _ in 0..1000 {
            if let Some(PopupPayload::Conversation { .. }) = pick(&facts, &pairs, &mut rng) {
                conversation_count += 1;
            }
        }
        // 0.4 weight: allow a generous band around the expectation.
        assert!((300..=500).contains(&conversation_count));
    }

    #[test]
    fn test_conversations_without_facts_can_still_pop() {
        let pairs = pairs();
        let mut rng = StdRng::seed_from_u64(4);

        let mut saw_conversation = false;
        for _ in 0..50 {
            match pick(&[], &pairs, &mut rng) {
                Some(PopupPayload::Conversation { pair }) => {
                    assert_eq!(pair.english, "Good morning");
                    saw_conversation = true;
                }
                Some(PopupPayload::Fact { .. }) => panic!("no facts to pick from"),
                None => {}
            }
        }
        assert!(saw_conversation);
    }

    #[test]
    fn test_conversation_payload_wire_shape() {
        let payload = PopupPayload::Conversation {
            pair: pairs().remove(0),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "conversation",
                "pair": {
                    "english": "Good morning",
                    "spanish": "Buenos días"
                }
            })
        );
    }

    #[test]
    fn test_fact_payload_wire_shape() {
        let payload = PopupPayload::Fact {
            title: "💡 Did You Know?".to_string(),
            icon: "💡".to_string(),
            fact: Fact::new("ANIMALS", "Cats sleep a lot"),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "fact",
                "title": "💡 Did You Know?",
                "icon": "💡",
                "fact": {
                    "category": "ANIMALS",
                    "fact": "Cats sleep a lot"
                }
            })
        );
    }
}

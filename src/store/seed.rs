//! Built-in starter facts shown before the user imports anything.

use crate::models::Fact;

const SEED_FACTS: &[(&str, &str)] = &[
    ("ANIMALS", "Cats sleep for around 70% of their lives."),
    ("ANIMALS", "Octopuses have three hearts and blue blood."),
    ("ANIMALS", "A group of flamingos is called a flamboyance."),
    ("ANIMALS", "Sea otters hold hands while sleeping so they do not drift apart."),
    ("SPACE", "A day on Venus is longer than its year."),
    ("SPACE", "Neutron stars can spin 600 times per second."),
    ("SPACE", "There are more stars in the universe than grains of sand on Earth."),
    ("SPACE", "Footprints on the Moon will last for millions of years."),
    ("HISTORY", "Oxford University is older than the Aztec Empire."),
    ("HISTORY", "Cleopatra lived closer in time to the Moon landing than to the building of the Great Pyramid."),
    ("HISTORY", "The shortest war in history lasted around 38 minutes."),
    ("SCIENCE", "Bananas are naturally radioactive."),
    ("SCIENCE", "Hot water can freeze faster than cold water."),
    ("SCIENCE", "A teaspoon of honey represents the life work of a dozen bees."),
    ("SCIENCE", "Your body contains about 37 trillion cells."),
    ("FOOD", "Honey never spoils; edible honey has been found in ancient tombs."),
    ("FOOD", "Tomatoes are botanically berries, but strawberries are not."),
    ("FOOD", "Carrots were originally purple, not orange."),
    ("GEOGRAPHY", "Canada has more lakes than the rest of the world combined."),
    ("GEOGRAPHY", "Africa is the only continent in all four hemispheres."),
    ("GEOGRAPHY", "Istanbul sits on two continents at once."),
];

/// The built-in facts, materialized for the store.
pub fn seed_facts() -> Vec<Fact> {
    SEED_FACTS
        .iter()
        .map(|(category, fact)| Fact::new(*category, *fact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_facts_are_well_formed() {
        let facts = seed_facts();
        assert!(!facts.is_empty());
        for fact in &facts {
            assert!(!fact.category.is_empty());
            assert_eq!(fact.category, fact.category.to_uppercase());
            assert!(!fact.fact.trim().is_empty());
        }
    }
}

//! The card catalog: definition lookup and random draw.
//!
//! `Catalog` stores the full set of card definitions and provides fast
//! lookup by id. `Catalog::standard()` builds the traditional 78-card
//! deck: 22 Major Arcana plus Ace through King in each of the four
//! suits. The catalog is fixed at construction and never mutated at
//! runtime.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, Suit};
use crate::core::SpreadRng;

/// Minor Arcana ranks, Ace through King.
const RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

/// Major Arcana (id, name), in traditional order.
const MAJOR_ARCANA: [(&str, &str); 22] = [
    ("fool", "The Fool"),
    ("magician", "The Magician"),
    ("high-priestess", "The High Priestess"),
    ("empress", "The Empress"),
    ("emperor", "The Emperor"),
    ("hierophant", "The Hierophant"),
    ("lovers", "The Lovers"),
    ("chariot", "The Chariot"),
    ("strength", "Strength"),
    ("hermit", "The Hermit"),
    ("wheel-of-fortune", "Wheel of Fortune"),
    ("justice", "Justice"),
    ("hanged-man", "The Hanged Man"),
    ("death", "Death"),
    ("temperance", "Temperance"),
    ("devil", "The Devil"),
    ("tower", "The Tower"),
    ("star", "The Star"),
    ("moon", "The Moon"),
    ("sun", "The Sun"),
    ("judgement", "Judgement"),
    ("world", "The World"),
];

/// Immutable catalog of card definitions.
///
/// Cards keep their deck order for iteration; an id index backs lookup.
///
/// ## Example
///
/// ```
/// use tarot_canvas::cards::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 78);
///
/// let found = catalog.get("ace-of-wands").unwrap();
/// assert_eq!(found.name, "Ace of Wands");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build the standard 78-card tarot deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards: Vec<CardDefinition> = MAJOR_ARCANA
            .iter()
            .map(|&(id, name)| CardDefinition::new(id, name))
            .collect();

        for suit in Suit::ALL {
            for rank in RANKS {
                let id = format!("{}-of-{}", rank.to_lowercase(), suit.as_str().to_lowercase());
                let name = format!("{} of {}", rank, suit);
                cards.push(CardDefinition::new(id, name).with_suit(suit));
            }
        }

        Self::from_cards(cards)
    }

    /// Build a catalog from an explicit card list.
    ///
    /// Panics if two cards share an id.
    #[must_use]
    pub fn from_cards(cards: Vec<CardDefinition>) -> Self {
        let mut index = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), i).is_some() {
                panic!("Card with id {:?} appears twice in catalog", card.id);
            }
        }
        Self { cards, index }
    }

    /// Get a card definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardDefinition> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check whether an id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of card definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Draw one card uniformly at random.
    ///
    /// Returns `None` only for an empty catalog.
    #[must_use]
    pub fn draw(&self, rng: &mut SpreadRng) -> Option<&CardDefinition> {
        rng.pick_index(self.cards.len()).map(|i| &self.cards[i])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_size() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 78);
        assert!(!catalog.is_empty());

        let majors = catalog.iter().filter(|c| c.suit.is_none()).count();
        assert_eq!(majors, 22);

        for suit in Suit::ALL {
            let count = catalog.iter().filter(|c| c.suit == Some(suit)).count();
            assert_eq!(count, 14, "suit {} should have 14 cards", suit);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 78);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.get("fool").unwrap().name, "The Fool");
        assert_eq!(catalog.get("king-of-pentacles").unwrap().suit, Some(Suit::Pentacles));
        assert!(catalog.contains("wheel-of-fortune"));
        assert!(catalog.get("joker").is_none());
    }

    #[test]
    fn test_draw_is_uniformly_in_catalog() {
        let catalog = Catalog::standard();
        let mut rng = SpreadRng::new(7);

        for _ in 0..100 {
            let card = catalog.draw(&mut rng).unwrap();
            assert!(catalog.contains(&card.id));
        }
    }

    #[test]
    fn test_draw_from_empty_catalog() {
        let catalog = Catalog::from_cards(Vec::new());
        let mut rng = SpreadRng::new(7);
        assert!(catalog.draw(&mut rng).is_none());
    }

    #[test]
    #[should_panic(expected = "appears twice")]
    fn test_duplicate_id_panics() {
        Catalog::from_cards(vec![
            CardDefinition::new("fool", "The Fool"),
            CardDefinition::new("fool", "The Fool Again"),
        ]);
    }
}

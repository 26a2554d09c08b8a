//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of one tarot card:
//! its string id, display name, and suit. Major Arcana cards carry no
//! suit. Where a card sits on the canvas is not part of the definition -
//! that lives in `DrawnCard`.

use serde::{Deserialize, Serialize};

/// Minor Arcana suit.
///
/// Major Arcana cards have no suit (`CardDefinition::suit` is `None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// All four suits, in traditional deck order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Display name of the suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static card definition.
///
/// Identifies a card type (e.g. "The Fool"), not a drawn instance on the
/// canvas. The catalog holds exactly one definition per id.
///
/// ## Example
///
/// ```
/// use tarot_canvas::cards::{CardDefinition, Suit};
///
/// let ace = CardDefinition::new("ace-of-cups", "Ace of Cups").with_suit(Suit::Cups);
/// assert_eq!(ace.arcana_label(), "Cups");
///
/// let fool = CardDefinition::new("fool", "The Fool");
/// assert_eq!(fool.arcana_label(), "Major Arcana");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique string key within the catalog (e.g. `"three-of-swords"`).
    pub id: String,

    /// Display name (e.g. `"Three of Swords"`).
    pub name: String,

    /// Suit for Minor Arcana cards; `None` for Major Arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
}

impl CardDefinition {
    /// Create a suitless (Major Arcana) card definition.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            suit: None,
        }
    }

    /// Assign a suit (builder pattern).
    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Label shown in the card's arcana slot: the suit name, or
    /// `"Major Arcana"` for suitless cards.
    #[must_use]
    pub fn arcana_label(&self) -> &'static str {
        self.suit.map_or("Major Arcana", Suit::as_str)
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_display() {
        assert_eq!(Suit::Wands.to_string(), "Wands");
        assert_eq!(Suit::Pentacles.as_str(), "Pentacles");
        assert_eq!(Suit::ALL.len(), 4);
    }

    #[test]
    fn test_card_definition_builder() {
        let card = CardDefinition::new("queen-of-swords", "Queen of Swords").with_suit(Suit::Swords);

        assert_eq!(card.id, "queen-of-swords");
        assert_eq!(card.name, "Queen of Swords");
        assert_eq!(card.suit, Some(Suit::Swords));
        assert_eq!(card.arcana_label(), "Swords");
    }

    #[test]
    fn test_major_arcana_has_no_suit() {
        let card = CardDefinition::new("tower", "The Tower");
        assert_eq!(card.suit, None);
        assert_eq!(card.arcana_label(), "Major Arcana");
    }

    #[test]
    fn test_suit_omitted_from_json_when_absent() {
        let major = CardDefinition::new("moon", "The Moon");
        let json = serde_json::to_string(&major).unwrap();
        assert!(!json.contains("suit"));

        let minor = CardDefinition::new("two-of-cups", "Two of Cups").with_suit(Suit::Cups);
        let json = serde_json::to_string(&minor).unwrap();
        assert!(json.contains("\"suit\":\"Cups\""));

        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, minor);
    }
}

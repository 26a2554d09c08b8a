//! Decorative glyph geometry for card faces.
//!
//! Each card renders a small vector illustration: a suit-colored central
//! symbol plus a handful of ornaments scattered from a seed derived from
//! the card id. The geometry is purely cosmetic - it never enters the
//! persisted format and carries no gameplay meaning - but it is
//! deterministic, so the same card always draws the same face.
//!
//! Coordinates live in a fixed 100x200 view box.

use serde::Serialize;
use smallvec::SmallVec;

use super::definition::{CardDefinition, Suit};

/// Primary/secondary colors for a card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Suit colors; gold/blue for the Major Arcana.
#[must_use]
pub fn palette_for(suit: Option<Suit>) -> Palette {
    match suit {
        None => Palette { primary: "#E6C06B", secondary: "#33C3F0" },
        Some(Suit::Wands) => Palette { primary: "#F97316", secondary: "#FBBF24" },
        Some(Suit::Cups) => Palette { primary: "#38BDF8", secondary: "#7DD3FC" },
        Some(Suit::Swords) => Palette { primary: "#A1A1AA", secondary: "#D4D4D8" },
        Some(Suit::Pentacles) => Palette { primary: "#16A34A", secondary: "#4ADE80" },
    }
}

/// One vector element of a card face.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GlyphElement {
    Circle { cx: f64, cy: f64, r: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Path { d: String },
    Star { cx: f64, cy: f64, r: f64, points: u32 },
}

/// A card face: palette plus element list, central symbol first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Glyph {
    pub palette: Palette,
    pub elements: SmallVec<[GlyphElement; 8]>,
}

/// xorshift64 stream seeded from the card id, mapped to view-box ranges.
struct SeededSequence(u64);

impl SeededSequence {
    fn for_card(card: &CardDefinition) -> Self {
        let seed = card
            .id
            .bytes()
            .fold(0x9E37_79B9_7F4A_7C15_u64, |acc, b| {
                acc.wrapping_mul(31).wrapping_add(u64::from(b))
            });
        Self(seed | 1)
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn in_range(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }
}

/// Generate the decorative face for a card.
///
/// Deterministic: the same definition always yields the same glyph.
#[must_use]
pub fn glyph_for(card: &CardDefinition) -> Glyph {
    let mut elements: SmallVec<[GlyphElement; 8]> = SmallVec::new();
    let mut seq = SeededSequence::for_card(card);

    match card.suit {
        Some(Suit::Wands) => {
            // Upright wand with a pommel.
            elements.push(GlyphElement::Line { x1: 50.0, y1: 30.0, x2: 50.0, y2: 130.0 });
            elements.push(GlyphElement::Circle { cx: 50.0, cy: 40.0, r: 8.0 });
        }
        Some(Suit::Cups) => {
            elements.push(GlyphElement::Path {
                d: "M35,70 Q50,40 65,70 L65,90 Q50,100 35,90 Z".to_string(),
            });
        }
        Some(Suit::Swords) => {
            // Blade and crossguard, ring at the grip.
            elements.push(GlyphElement::Path {
                d: "M50,30 L50,130 M30,50 L70,50".to_string(),
            });
            elements.push(GlyphElement::Circle { cx: 50.0, cy: 50.0, r: 10.0 });
        }
        Some(Suit::Pentacles) => {
            elements.push(GlyphElement::Star { cx: 50.0, cy: 80.0, r: 25.0, points: 5 });
            elements.push(GlyphElement::Circle { cx: 50.0, cy: 80.0, r: 30.0 });
        }
        None => {
            // Major Arcana share an emblem; the ornaments set them apart.
            elements.push(GlyphElement::Star { cx: 50.0, cy: 70.0, r: 22.0, points: 8 });
            elements.push(GlyphElement::Circle { cx: 50.0, cy: 70.0, r: 28.0 });
        }
    }

    let ornaments = 3 + (seq.next() % 3) as usize;
    for _ in 0..ornaments {
        let cx = seq.in_range(15.0, 85.0);
        let cy = seq.in_range(120.0, 185.0);
        let r = seq.in_range(2.0, 6.0);
        elements.push(GlyphElement::Circle { cx, cy, r });
    }

    Glyph {
        palette: palette_for(card.suit),
        elements,
    }
}

//! Card system: definitions, catalog, and decorative glyphs.
//!
//! ## Key Types
//!
//! - `Suit`: Minor Arcana suit (Major Arcana cards have none)
//! - `CardDefinition`: Static card data (id, name, suit)
//! - `Catalog`: The fixed 78-card deck with lookup and random draw
//! - `Glyph`: Deterministic decorative face geometry

pub mod catalog;
pub mod definition;
pub mod glyph;

pub use catalog::Catalog;
pub use definition::{CardDefinition, Suit};
pub use glyph::{glyph_for, palette_for, Glyph, GlyphElement, Palette};

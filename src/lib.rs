//! # tarot-canvas
//!
//! Headless state engine for a freeform tarot-spread canvas: draw cards
//! from a fixed 78-card catalog onto a canvas, drag them into a spread,
//! and keep past readings in a persistent slot.
//!
//! ## Design
//!
//! - **One source of truth**: `ReadingStore` owns the reading collection
//!   and the current reading; every mutation goes through its methods
//!   and rewrites the persisted collection in full.
//!
//! - **Total operations**: unknown ids and out-of-range card indexes
//!   are silent no-ops, and a malformed stored payload degrades to an
//!   empty collection. There is no fatal path in normal operation.
//!
//! - **Drags commit on release**: `DragController` keeps per-move
//!   positions local and only reports the final position back to the
//!   store, so persistence never sees partial drag frames.
//!
//! - **Single-threaded**: operations run to completion in event order.
//!   The types are plain data; a multi-threaded host adds its own
//!   mutex or single-writer discipline.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, the 78-card catalog, decorative glyphs
//! - `core`: Canvas geometry and RNG
//! - `reading`: Reading records, storage slot, reading store
//! - `canvas`: Drag state machine and the session gluing it to the store

pub mod canvas;
pub mod cards;
pub mod core;
pub mod reading;

// Re-export commonly used types
pub use crate::canvas::{CanvasSession, DragController};
pub use crate::cards::{glyph_for, CardDefinition, Catalog, Glyph, Suit};
pub use crate::core::{Position, SpreadRng, Viewport, CARD_HEIGHT, CARD_WIDTH};
pub use crate::reading::{
    DrawOutcome, DrawnCard, FileStorage, MemoryStorage, Reading, ReadingStorage, ReadingStore,
    STORAGE_KEY,
};

//! Core types: canvas geometry and RNG.
//!
//! Fundamental building blocks shared by the catalog, the reading
//! store, and the interaction layer.

pub mod geometry;
pub mod rng;

pub use geometry::{Position, Viewport, CARD_HEIGHT, CARD_WIDTH};
pub use rng::SpreadRng;

//! Canvas geometry: positions, viewport, and card extents.
//!
//! Coordinates are pixels with the origin at the canvas top-left.
//! Positions are never clamped - a card may sit partly or fully
//! off-screen, and that placement round-trips through persistence
//! unchanged.

use serde::{Deserialize, Serialize};

/// Rendered card width in pixels.
pub const CARD_WIDTH: f64 = 150.0;

/// Rendered card height in pixels.
pub const CARD_HEIGHT: f64 = 250.0;

/// A card's top-left corner on the canvas, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise translation.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Visible canvas dimensions, supplied by the host and refreshed on
/// resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a card in this viewport.
    #[must_use]
    pub fn card_center(self) -> Position {
        Position::new(
            self.width / 2.0 - CARD_WIDTH / 2.0,
            self.height / 2.0 - CARD_HEIGHT / 2.0,
        )
    }
}

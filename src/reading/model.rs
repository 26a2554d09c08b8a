//! Reading records: a drawn card with a position, and the named,
//! timestamped sequence of them that makes up one spread.
//!
//! These are the persisted types. Field names serialize in camelCase and
//! timestamps as ISO-8601, matching the stored collection layout.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::CardDefinition;
use crate::core::Position;

/// One card on the canvas: the definition it shows plus where its
/// top-left corner sits.
///
/// Owned exclusively by the reading that contains it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnCard {
    pub card: CardDefinition,
    pub position: Position,
}

/// A named, timestamped, ordered collection of drawn cards - one
/// user session/spread.
///
/// Card order is draw order; the index into `cards` is the addressing
/// key for position updates. A reading with no cards is a draft and is
/// never committed to the stored collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// UUID v4, assigned at creation and never reassigned.
    pub id: String,

    /// Display title. Duplicates across readings are allowed.
    pub title: String,

    /// Creation instant.
    pub timestamp: DateTime<Utc>,

    /// Drawn cards in draw order.
    pub cards: Vec<DrawnCard>,
}

impl Reading {
    /// Mint a fresh empty reading with a new id, the current time, and
    /// a title derived from the local clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: default_title(Local::now()),
            timestamp: Utc::now(),
            cards: Vec::new(),
        }
    }

    /// A reading with no cards yet; drafts are not committed to the
    /// collection.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self::new()
    }
}

/// `Reading - Mar 4, 2025 3:12 PM`
fn default_title(now: DateTime<Local>) -> String {
    format!("Reading - {}", now.format("%b %-d, %Y %-I:%M %p"))
}

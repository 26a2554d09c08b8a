//! The reading store: single source of truth for the reading
//! collection and the current reading.
//!
//! Every mutation - draw, reposition, rename, delete, reset, load -
//! goes through this type, and each one rewrites the full collection
//! into the storage slot afterwards. Operations are total: unknown ids
//! and out-of-range card indexes are silent no-ops, because they only
//! arise from stale UI state, not from caller bugs worth surfacing.
//!
//! The store owns its state outright. It is plain data with no interior
//! locking; a multi-threaded host wraps it in a mutex or confines it to
//! one writer.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::model::{DrawnCard, Reading};
use super::storage::ReadingStorage;
use crate::cards::{Catalog, CardDefinition};
use crate::core::{Position, SpreadRng, Viewport};

/// Jitter applied to each axis of a drawn card's spawn position, so
/// consecutive draws don't stack perfectly.
const DRAW_JITTER: f64 = 15.0;

/// Result of a draw, with enough context for host notifications
/// ("New reading started with X" vs "You've drawn X").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// The card that was drawn.
    pub card: CardDefinition,

    /// True when this draw minted a new reading to hold its first card.
    pub started_new_reading: bool,
}

/// State container for the reading collection and the current reading.
///
/// ## Lifecycle
///
/// A fresh empty current reading is minted at startup, after a reset,
/// and after deleting the current reading. A draft (zero cards) never
/// enters the collection; the first draw mints a new reading and
/// commits it immediately.
///
/// ## Example
///
/// ```
/// use tarot_canvas::core::{SpreadRng, Viewport};
/// use tarot_canvas::reading::{MemoryStorage, ReadingStore};
///
/// let mut store = ReadingStore::with_rng(
///     MemoryStorage::new(),
///     Viewport::new(1280.0, 800.0),
///     SpreadRng::new(42),
/// );
///
/// let outcome = store.draw_card().unwrap();
/// assert!(outcome.started_new_reading);
/// assert_eq!(store.current().cards.len(), 1);
/// assert_eq!(store.readings().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ReadingStore<S: ReadingStorage> {
    catalog: Catalog,
    readings: Vec<Reading>,
    current: Reading,
    viewport: Viewport,
    rng: SpreadRng,
    storage: S,
}

impl<S: ReadingStorage> ReadingStore<S> {
    /// Open a store over the given slot, with an entropy-seeded RNG and
    /// the standard 78-card catalog.
    ///
    /// Previously stored readings are loaded; an absent or malformed
    /// payload yields an empty collection (logged, never an error). The
    /// current reading always starts as a fresh draft.
    #[must_use]
    pub fn new(storage: S, viewport: Viewport) -> Self {
        Self::with_rng(storage, viewport, SpreadRng::from_entropy())
    }

    /// Open a store with an explicit RNG, for reproducible draws.
    #[must_use]
    pub fn with_rng(storage: S, viewport: Viewport, rng: SpreadRng) -> Self {
        let readings = load_collection(&storage);
        Self {
            catalog: Catalog::standard(),
            readings,
            current: Reading::new(),
            viewport,
            rng,
            storage,
        }
    }

    /// Swap in a non-standard catalog (builder pattern).
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    // === Accessors ===

    /// All committed readings, oldest first.
    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// The reading being edited/displayed.
    #[must_use]
    pub fn current(&self) -> &Reading {
        &self.current
    }

    /// The card catalog draws come from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The storage slot (mainly for inspection in tests).
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Update the viewport used to center newly drawn cards.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // === Operations ===

    /// Draw a random card onto the canvas.
    ///
    /// The card spawns centered in the viewport with up to ±15px of
    /// jitter per axis. If the current reading is a draft, a new
    /// reading is minted to hold the card and committed to the
    /// collection immediately; otherwise the card is appended and the
    /// collection mirror updated. Persists afterwards.
    ///
    /// Returns `None` only when the catalog is empty.
    pub fn draw_card(&mut self) -> Option<DrawOutcome> {
        let card = self.catalog.draw(&mut self.rng)?.clone();
        let position = self
            .viewport
            .card_center()
            .translated(self.rng.jitter(DRAW_JITTER), self.rng.jitter(DRAW_JITTER));

        let started_new_reading = self.current.is_draft();
        if started_new_reading {
            self.current = Reading::new();
        }

        self.current.cards.push(DrawnCard {
            card: card.clone(),
            position,
        });

        if started_new_reading {
            self.readings.push(self.current.clone());
        } else {
            self.mirror_current();
        }

        debug!("drew {} into reading {}", card.name, self.current.id);
        self.persist();

        Some(DrawOutcome {
            card,
            started_new_reading,
        })
    }

    /// Start a new reading.
    ///
    /// A current reading with cards that is not yet in the collection
    /// is committed first; a draft is simply discarded. Persists
    /// afterwards.
    pub fn reset_reading(&mut self) {
        self.commit_draft();
        self.current = Reading::new();
        self.persist();
    }

    /// Move the card at `index` in the current reading to `position`.
    ///
    /// Out-of-range indexes leave the store (and the slot) untouched.
    /// The collection mirror is updated when the current reading is
    /// committed. Persists afterwards.
    pub fn update_card_position(&mut self, index: usize, position: Position) {
        let Some(drawn) = self.current.cards.get_mut(index) else {
            debug!(
                "ignoring reposition of card {} in reading {} ({} cards)",
                index,
                self.current.id,
                self.current.cards.len()
            );
            return;
        };

        drawn.position = position;
        self.mirror_current();
        self.persist();
    }

    /// Make the stored reading with `id` the current reading.
    ///
    /// A non-draft current reading absent from the collection is
    /// committed first. The loaded reading is copied out of the
    /// collection, so later edits only reach the stored entry through
    /// the usual mirroring. Returns whether the id was found; a lookup
    /// miss that changed nothing writes nothing.
    pub fn load_reading(&mut self, id: &str) -> bool {
        let committed = self.commit_draft();

        let loaded = match self.readings.iter().find(|r| r.id == id) {
            Some(reading) => {
                self.current = reading.clone();
                true
            }
            None => false,
        };

        if committed || loaded {
            self.persist();
        }
        loaded
    }

    /// Remove the reading with `id` from the collection.
    ///
    /// If it was the current reading, the current reading becomes a
    /// fresh draft. Persists afterwards. Returns whether an entry was
    /// removed.
    pub fn delete_reading(&mut self, id: &str) -> bool {
        let before = self.readings.len();
        self.readings.retain(|r| r.id != id);
        let removed = self.readings.len() != before;

        if self.current.id == id {
            self.current = Reading::new();
        }

        self.persist();
        removed
    }

    /// Retitle the reading with `id`.
    ///
    /// The current reading's title is kept in sync when it shares the
    /// id. Any title is accepted, including an empty one - trimming and
    /// validation belong to the caller. Unknown ids are a no-op.
    /// Persists afterwards. Returns whether the id was found.
    pub fn rename_reading(&mut self, id: &str, new_title: impl Into<String>) -> bool {
        let Some(entry) = self.readings.iter_mut().find(|r| r.id == id) else {
            return false;
        };

        let new_title = new_title.into();
        entry.title = new_title.clone();
        if self.current.id == id {
            self.current.title = new_title;
        }

        self.persist();
        true
    }

    // === Internals ===

    /// Commit the current reading into the collection if it has cards
    /// and is not already there. Returns whether anything was inserted.
    fn commit_draft(&mut self) -> bool {
        if self.current.is_draft() || self.readings.iter().any(|r| r.id == self.current.id) {
            return false;
        }
        self.readings.push(self.current.clone());
        true
    }

    /// Copy the current reading over its collection entry, matched by
    /// id. No-op while the current reading is an uncommitted draft.
    fn mirror_current(&mut self) {
        if let Some(entry) = self.readings.iter_mut().find(|r| r.id == self.current.id) {
            *entry = self.current.clone();
        }
    }

    /// Rewrite the full collection into the storage slot. Failures are
    /// logged and swallowed - in-memory state stays authoritative.
    fn persist(&mut self) {
        match serde_json::to_string(&self.readings) {
            Ok(payload) => {
                if let Err(err) = self.storage.store(&payload) {
                    warn!("Failed to persist readings: {err:#}");
                }
            }
            Err(err) => warn!("Failed to serialize readings: {err}"),
        }
    }
}

/// Deserialize the stored collection; absent or malformed payloads
/// yield an empty one.
fn load_collection<S: ReadingStorage>(storage: &S) -> Vec<Reading> {
    match storage.load() {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(readings) => readings,
            Err(err) => {
                warn!("Discarding malformed stored readings: {err}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!("Failed to load stored readings: {err:#}");
            Vec::new()
        }
    }
}

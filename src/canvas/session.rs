//! Canvas session: one drag controller per drawn card, wired to the
//! reading store.
//!
//! The session is the seam a presentation layer renders from: it keeps
//! the controller list matched to the current reading's cards, routes
//! input to the right controller, and commits final drag positions back
//! into the store on release. Store mutations that can replace the
//! current reading (draw, reset, load, delete) resynchronize the
//! controllers.

use super::drag::DragController;
use crate::core::{Position, Viewport};
use crate::reading::{DrawOutcome, ReadingStorage, ReadingStore};

/// A reading store plus the per-card drag state for its current
/// reading.
#[derive(Clone, Debug)]
pub struct CanvasSession<S: ReadingStorage> {
    store: ReadingStore<S>,
    controllers: Vec<DragController>,
}

impl<S: ReadingStorage> CanvasSession<S> {
    /// Wrap a store, building controllers for its current reading.
    #[must_use]
    pub fn new(store: ReadingStore<S>) -> Self {
        let mut session = Self {
            store,
            controllers: Vec::new(),
        };
        session.sync_controllers();
        session
    }

    /// The underlying store (read-only; mutations go through the
    /// session so controllers stay in sync).
    #[must_use]
    pub fn store(&self) -> &ReadingStore<S> {
        &self.store
    }

    /// Number of cards on the canvas.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.controllers.len()
    }

    /// Displayed position of the card at `index`: transient while it is
    /// being dragged, committed otherwise.
    #[must_use]
    pub fn card_position(&self, index: usize) -> Option<Position> {
        self.controllers.get(index).map(DragController::position)
    }

    #[must_use]
    pub fn is_dragging(&self, index: usize) -> bool {
        self.controllers
            .get(index)
            .is_some_and(DragController::is_dragging)
    }

    // === Store operations ===

    pub fn draw_card(&mut self) -> Option<DrawOutcome> {
        let outcome = self.store.draw_card();
        self.sync_controllers();
        outcome
    }

    pub fn reset_reading(&mut self) {
        self.store.reset_reading();
        self.sync_controllers();
    }

    pub fn load_reading(&mut self, id: &str) -> bool {
        let loaded = self.store.load_reading(id);
        self.sync_controllers();
        loaded
    }

    pub fn delete_reading(&mut self, id: &str) -> bool {
        let removed = self.store.delete_reading(id);
        self.sync_controllers();
        removed
    }

    pub fn rename_reading(&mut self, id: &str, new_title: impl Into<String>) -> bool {
        self.store.rename_reading(id, new_title)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.store.set_viewport(viewport);
    }

    // === Input routing ===

    pub fn pointer_down(&mut self, index: usize, point: Position) {
        if let Some(ctrl) = self.controllers.get_mut(index) {
            ctrl.pointer_down(point);
        }
    }

    pub fn pointer_move(&mut self, index: usize, point: Position) {
        if let Some(ctrl) = self.controllers.get_mut(index) {
            ctrl.pointer_move(point);
        }
    }

    pub fn touch_start(&mut self, index: usize, touches: &[Position]) {
        if let Some(ctrl) = self.controllers.get_mut(index) {
            ctrl.touch_start(touches);
        }
    }

    pub fn touch_move(&mut self, index: usize, touches: &[Position]) {
        if let Some(ctrl) = self.controllers.get_mut(index) {
            ctrl.touch_move(touches);
        }
    }

    /// End the drag on card `index`, committing its final position into
    /// the store (and, through it, the persisted collection).
    pub fn release(&mut self, index: usize) {
        let Some(ctrl) = self.controllers.get_mut(index) else {
            return;
        };
        if let Some(position) = ctrl.release() {
            self.store.update_card_position(index, position);
        }
    }

    /// Match controllers to the current reading's cards: drop extras,
    /// resync idle ones, and add controllers for newly drawn cards.
    fn sync_controllers(&mut self) {
        let cards = &self.store.current().cards;
        self.controllers.truncate(cards.len());
        for (i, drawn) in cards.iter().enumerate() {
            match self.controllers.get_mut(i) {
                Some(ctrl) => ctrl.sync(drawn.position),
                None => self.controllers.push(DragController::new(drawn.position)),
            }
        }
    }
}

//! Per-card drag state machine.
//!
//! Each card on the canvas owns one `DragController` cycling through
//! Idle -> Dragging -> Idle. On grab it captures the offset between the
//! input point and the card's top-left corner; that offset stays fixed
//! for the whole drag, so the card tracks the pointer without jumping
//! to center under it.
//!
//! Moves only update the controller's local displayed position - the
//! store hears nothing until release, so a drag never floods
//! persistence with partial frames. There is no cancel gesture:
//! releasing anywhere, including outside the canvas, commits the last
//! known coordinates.

use crate::core::Position;

/// Where a drag stands, and the captured grip offset while active.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    /// `dx`/`dy` is the input point minus the card's top-left corner
    /// at grab time.
    Dragging { dx: f64, dy: f64 },
}

/// Drag gesture handler for a single card.
///
/// ## Example
///
/// ```
/// use tarot_canvas::canvas::DragController;
/// use tarot_canvas::core::Position;
///
/// let mut drag = DragController::new(Position::new(100.0, 100.0));
/// drag.pointer_down(Position::new(110.0, 120.0)); // grab 10,20 inside the card
/// drag.pointer_move(Position::new(210.0, 220.0));
/// assert_eq!(drag.position(), Position::new(200.0, 200.0));
///
/// let committed = drag.release().unwrap();
/// assert_eq!(committed, Position::new(200.0, 200.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragController {
    position: Position,
    phase: DragPhase,
}

impl DragController {
    /// Controller for a card displayed at `initial`.
    #[must_use]
    pub fn new(initial: Position) -> Self {
        Self {
            position: initial,
            phase: DragPhase::Idle,
        }
    }

    /// The card's displayed position: transient while dragging, the
    /// last committed/synced value while idle.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Resynchronize the displayed position to an externally supplied
    /// value (e.g. a different reading was loaded). Ignored while a
    /// drag is active.
    pub fn sync(&mut self, position: Position) {
        if !self.is_dragging() {
            self.position = position;
        }
    }

    /// Mouse button pressed on the card at `point`.
    pub fn pointer_down(&mut self, point: Position) {
        self.grab(point);
    }

    /// Mouse moved to `point`.
    pub fn pointer_move(&mut self, point: Position) {
        self.track(point);
    }

    /// Touch began; only a single finger starts a drag.
    pub fn touch_start(&mut self, touches: &[Position]) {
        if let [touch] = touches {
            self.grab(*touch);
        }
    }

    /// Touch moved; a second finger does not alter an active drag.
    pub fn touch_move(&mut self, touches: &[Position]) {
        if let [touch] = touches {
            self.track(*touch);
        }
    }

    /// Pointer released / touch ended.
    ///
    /// Returns the final position to commit if a drag was active.
    pub fn release(&mut self) -> Option<Position> {
        if self.is_dragging() {
            self.phase = DragPhase::Idle;
            Some(self.position)
        } else {
            None
        }
    }

    fn grab(&mut self, point: Position) {
        if !self.is_dragging() {
            self.phase = DragPhase::Dragging {
                dx: point.x - self.position.x,
                dy: point.y - self.position.y,
            };
        }
    }

    fn track(&mut self, point: Position) {
        if let DragPhase::Dragging { dx, dy } = self.phase {
            self.position = Position::new(point.x - dx, point.y - dy);
        }
    }
}

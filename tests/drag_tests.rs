//! Drag interaction integration tests.
//!
//! Drive the canvas session the way a front end would: press, move,
//! release, and check what reaches the store and the storage slot.

use tarot_canvas::canvas::CanvasSession;
use tarot_canvas::core::{Position, SpreadRng, Viewport};
use tarot_canvas::reading::{MemoryStorage, Reading, ReadingStore};

fn new_session() -> CanvasSession<MemoryStorage> {
    CanvasSession::new(ReadingStore::with_rng(
        MemoryStorage::new(),
        Viewport::new(1280.0, 800.0),
        SpreadRng::new(42),
    ))
}

// =============================================================================
// Drag lifecycle
// =============================================================================

/// Moves during a drag stay local; only the release writes to the
/// store and the slot.
#[test]
fn test_moves_are_local_until_release() {
    let mut session = new_session();
    session.draw_card().unwrap();

    let start = session.card_position(0).unwrap();
    let payload_before = session.store().storage().payload().unwrap().to_string();

    session.pointer_down(0, Position::new(start.x + 5.0, start.y + 5.0));
    for step in 1..=10 {
        let step = f64::from(step);
        session.pointer_move(0, Position::new(start.x + 5.0 + step, start.y + 5.0 + step));
    }

    // Ten move events, zero persistence writes.
    assert_eq!(session.store().storage().payload().unwrap(), payload_before);
    assert_eq!(session.store().current().cards[0].position, start);
    assert!(session.is_dragging(0));

    session.release(0);

    let landed = Position::new(start.x + 10.0, start.y + 10.0);
    assert_eq!(session.card_position(0), Some(landed));
    assert_eq!(session.store().current().cards[0].position, landed);

    let readings: Vec<Reading> =
        serde_json::from_str(session.store().storage().payload().unwrap()).unwrap();
    assert_eq!(readings[0].cards[0].position, landed);
}

/// The grip offset anchors the card under the pointer instead of
/// snapping its corner to the cursor.
#[test]
fn test_card_does_not_jump_to_cursor() {
    let mut session = new_session();
    session.draw_card().unwrap();

    let start = session.card_position(0).unwrap();
    // Grab near the card's bottom-right area.
    session.pointer_down(0, Position::new(start.x + 120.0, start.y + 200.0));
    session.pointer_move(0, Position::new(start.x + 121.0, start.y + 201.0));

    assert_eq!(
        session.card_position(0),
        Some(Position::new(start.x + 1.0, start.y + 1.0))
    );
}

/// Dragging one card leaves the others where they are.
#[test]
fn test_dragging_targets_one_card() {
    let mut session = new_session();
    session.draw_card().unwrap();
    session.draw_card().unwrap();

    let other = session.card_position(1).unwrap();
    let start = session.card_position(0).unwrap();

    session.pointer_down(0, start);
    session.pointer_move(0, Position::new(start.x + 50.0, start.y));
    session.release(0);

    assert_eq!(session.card_position(1), Some(other));
    assert_eq!(session.store().current().cards[1].position, other);
}

// =============================================================================
// Resynchronization
// =============================================================================

/// Loading a different reading resynchronizes every idle controller to
/// the loaded positions.
#[test]
fn test_load_resyncs_controllers() {
    let mut session = new_session();
    session.draw_card().unwrap();
    let first_id = session.store().current().id.clone();
    let start = session.card_position(0).unwrap();
    session.pointer_down(0, start);
    session.pointer_move(0, Position::new(400.0, 300.0));
    session.release(0);
    let arranged = session.card_position(0).unwrap();

    session.reset_reading();
    session.draw_card().unwrap();
    session.draw_card().unwrap();
    assert_eq!(session.card_count(), 2);

    assert!(session.load_reading(&first_id));
    assert_eq!(session.card_count(), 1);
    assert_eq!(session.card_position(0), Some(arranged));
}

/// Deleting the current reading empties the canvas.
#[test]
fn test_delete_current_empties_canvas() {
    let mut session = new_session();
    session.draw_card().unwrap();
    let id = session.store().current().id.clone();

    assert!(session.delete_reading(&id));
    assert_eq!(session.card_count(), 0);
    assert!(session.store().current().is_draft());
}

// =============================================================================
// Touch input
// =============================================================================

/// A single finger drags; a second finger neither starts a drag nor
/// steers an active one.
#[test]
fn test_touch_drag_is_single_finger() {
    let mut session = new_session();
    session.draw_card().unwrap();
    let start = session.card_position(0).unwrap();

    session.touch_start(0, &[start, Position::new(0.0, 0.0)]);
    assert!(!session.is_dragging(0));

    session.touch_start(0, &[start]);
    assert!(session.is_dragging(0));

    session.touch_move(0, &[Position::new(start.x + 30.0, start.y), Position::new(0.0, 0.0)]);
    assert_eq!(session.card_position(0), Some(start));

    session.touch_move(0, &[Position::new(start.x + 30.0, start.y)]);
    session.release(0);
    assert_eq!(
        session.store().current().cards[0].position,
        Position::new(start.x + 30.0, start.y)
    );
}

/// Releasing far outside the viewport still commits the coordinates
/// unclamped.
#[test]
fn test_release_off_canvas_commits_unclamped() {
    let mut session = new_session();
    session.draw_card().unwrap();
    let start = session.card_position(0).unwrap();

    session.pointer_down(0, start);
    session.pointer_move(0, Position::new(-2000.0, 5000.0));
    session.release(0);

    assert_eq!(
        session.store().current().cards[0].position,
        Position::new(-2000.0, 5000.0)
    );
}

//! Interaction layer: per-card drag handling and the session that ties
//! it to the store.
//!
//! ## Key Types
//!
//! - `DragController`: Idle -> Dragging -> Idle state machine per card
//! - `CanvasSession`: controllers wired to a `ReadingStore`

pub mod drag;
pub mod session;

pub use drag::DragController;
pub use session::CanvasSession;

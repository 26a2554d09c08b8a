//! Reading state: records, storage slot, and the store that owns them.
//!
//! ## Key Types
//!
//! - `Reading` / `DrawnCard`: The persisted records
//! - `ReadingStorage`: Slot abstraction (`FileStorage`, `MemoryStorage`)
//! - `ReadingStore`: All mutation and persistence synchronization
//! - `DrawOutcome`: What a draw produced, for host notifications

pub mod model;
pub mod storage;
pub mod store;

pub use model::{DrawnCard, Reading};
pub use storage::{FileStorage, MemoryStorage, ReadingStorage, STORAGE_KEY};
pub use store::{DrawOutcome, ReadingStore};

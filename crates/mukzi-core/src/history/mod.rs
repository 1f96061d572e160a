//! History log model and store abstraction.

pub mod model;
pub mod repository;

pub use model::{EntryKind, HistoryEntry};
pub use repository::HistoryStore;

//! Persisted data schemas, kept separate from the domain models.

pub mod history_entry;

pub use history_entry::{ChatPayload, HistoryEntryDto};

//! History store trait.
//!
//! Defines the interface for the append-only history log.

use super::model::HistoryEntry;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Weekday;

/// An abstract store for the append-only history log.
///
/// This trait decouples the scoring pipeline from the storage mechanism
/// (JSON file, database, remote service). The log grows monotonically;
/// entries are never updated or deleted.
///
/// # Implementation Notes
///
/// Concurrent appends must not lose entries. Implementations are expected
/// to serialize writes themselves (file locking, a single-writer queue, or
/// a transactional datastore); callers do not coordinate.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends one entry to the log.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Entry durably appended
    /// - `Err(_)`: Error occurred during the write
    async fn append(&self, entry: &HistoryEntry) -> Result<()>;

    /// Reads all entries, optionally filtered to one weekday.
    ///
    /// # Arguments
    ///
    /// * `weekday` - When set, only entries recorded on that weekday
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<HistoryEntry>)`: Matching entries in append order
    /// - `Err(_)`: Error occurred during retrieval
    async fn read_all(&self, weekday: Option<Weekday>) -> Result<Vec<HistoryEntry>>;
}

//! In-memory implementation of the history store.
//!
//! For tests and embedders that don't need durability.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Weekday;
use mukzi_core::history::{HistoryEntry, HistoryStore};
use tokio::sync::RwLock;

/// A [`HistoryStore`] holding entries in memory.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries.
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, entry: &HistoryEntry) -> Result<()> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn read_all(&self, weekday: Option<Weekday>) -> Result<Vec<HistoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| weekday.is_none_or(|day| e.weekday == day))
            .cloned()
            .collect())
    }
}

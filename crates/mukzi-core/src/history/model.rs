//! History domain model.
//!
//! The history log is the sole persisted state the core reads: an
//! append-only record of past chat interactions, mined per weekday for
//! category preferences. Each entry is immutable once written.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of interaction an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The user asked for a recommendation.
    Query,
    /// The user confirmed an actual selection.
    ConfirmedSelection,
}

/// One record of the append-only history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Weekday the interaction happened on.
    pub weekday: Weekday,
    /// The raw chat text the preference analyzer mines.
    pub raw_text: String,
    /// When the interaction happened.
    pub timestamp: DateTime<Utc>,
    /// Query or confirmed selection.
    pub kind: EntryKind,
    /// Localized category name, when the interaction resolved to one.
    pub category: Option<String>,
    /// Restaurant name, when a concrete place was chosen.
    pub restaurant_name: Option<String>,
}

impl HistoryEntry {
    /// Creates a query entry.
    pub fn query(weekday: Weekday, raw_text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            weekday,
            raw_text: raw_text.into(),
            timestamp,
            kind: EntryKind::Query,
            category: None,
            restaurant_name: None,
        }
    }

    /// Creates a confirmed-selection entry.
    pub fn confirmed_selection(
        weekday: Weekday,
        raw_text: impl Into<String>,
        timestamp: DateTime<Utc>,
        category: impl Into<String>,
        restaurant_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            weekday,
            raw_text: raw_text.into(),
            timestamp,
            kind: EntryKind::ConfirmedSelection,
            category: Some(category.into()),
            restaurant_name,
        }
    }
}

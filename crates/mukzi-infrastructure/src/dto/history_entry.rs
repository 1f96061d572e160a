//! Persisted history entry schema.
//!
//! The on-disk log is a JSON array of `{ day, chat }` rows, where `day`
//! is the full English weekday name and `chat` is the JSON-encoded entry
//! payload. The nested encoding is the collaborator contract of the chat
//! layer that writes these rows; this module keeps the domain model
//! isolated from it.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc, Weekday};
use mukzi_core::history::{EntryKind, HistoryEntry};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// One persisted row of the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntryDto {
    /// Full English weekday name ("Monday" .. "Sunday").
    pub day: String,
    /// JSON-encoded [`ChatPayload`].
    pub chat: String,
}

/// The structured content packed into a row's `chat` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub id: Uuid,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

/// Full English name for a weekday, as persisted in `day`.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl HistoryEntryDto {
    /// Converts a domain entry to its persisted form.
    pub fn from_domain(entry: &HistoryEntry) -> Result<Self> {
        let payload = ChatPayload {
            id: entry.id,
            text: entry.raw_text.clone(),
            timestamp: entry.timestamp.timestamp_millis(),
            kind: entry.kind,
            category: entry.category.clone(),
            restaurant_name: entry.restaurant_name.clone(),
        };
        Ok(Self {
            day: day_name(entry.weekday).to_string(),
            chat: serde_json::to_string(&payload).context("failed to encode chat payload")?,
        })
    }

    /// Converts a persisted row back to the domain model.
    ///
    /// Fails on an unknown weekday, an undecodable `chat` payload, or an
    /// out-of-range timestamp; the repository treats such rows as
    /// skippable, not fatal.
    pub fn into_domain(self) -> Result<HistoryEntry> {
        let weekday = Weekday::from_str(&self.day)
            .map_err(|_| anyhow!("unknown weekday '{}'", self.day))?;
        let payload: ChatPayload =
            serde_json::from_str(&self.chat).context("failed to decode chat payload")?;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(payload.timestamp)
            .ok_or_else(|| anyhow!("timestamp {} out of range", payload.timestamp))?;

        Ok(HistoryEntry {
            id: payload.id,
            weekday,
            raw_text: payload.text,
            timestamp,
            kind: payload.kind,
            category: payload.category,
            restaurant_name: payload.restaurant_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let entry = HistoryEntry::confirmed_selection(
            Weekday::Fri,
            "치킨으로 확정",
            Utc::now(),
            "치킨",
            Some("bhc".to_string()),
        );
        let dto = HistoryEntryDto::from_domain(&entry).unwrap();
        assert_eq!(dto.day, "Friday");

        let back = dto.into_domain().unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.weekday, entry.weekday);
        assert_eq!(back.raw_text, entry.raw_text);
        assert_eq!(back.kind, entry.kind);
        assert_eq!(back.category, entry.category);
        assert_eq!(back.restaurant_name, entry.restaurant_name);
        // Sub-millisecond precision is dropped by the wire format.
        assert_eq!(
            back.timestamp.timestamp_millis(),
            entry.timestamp.timestamp_millis()
        );
    }

    #[test]
    fn test_into_domain_rejects_unknown_weekday() {
        let dto = HistoryEntryDto {
            day: "Someday".to_string(),
            chat: "{}".to_string(),
        };
        assert!(dto.into_domain().is_err());
    }

    #[test]
    fn test_into_domain_rejects_garbage_chat() {
        let dto = HistoryEntryDto {
            day: "Monday".to_string(),
            chat: "not json".to_string(),
        };
        assert!(dto.into_domain().is_err());
    }

    #[test]
    fn test_day_parsing_accepts_short_names() {
        let entry = HistoryEntry::query(Weekday::Wed, "test", Utc::now());
        let mut dto = HistoryEntryDto::from_domain(&entry).unwrap();
        dto.day = "Wed".to_string();
        assert_eq!(dto.into_domain().unwrap().weekday, Weekday::Wed);
    }
}

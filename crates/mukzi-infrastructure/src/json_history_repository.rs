//! File-backed implementation of the history store.

use crate::dto::HistoryEntryDto;
use crate::paths::{MukziPaths, PathError};
use crate::storage::AtomicJsonFile;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Weekday;
use mukzi_core::history::{HistoryEntry, HistoryStore};
use std::path::PathBuf;

/// A [`HistoryStore`] persisting to a single JSON file.
///
/// Appends are serialized through the atomic file layer's exclusive lock,
/// so concurrent writers cannot lose entries. Rows that fail to parse on
/// read are logged and skipped; one corrupt row never hides the rest of
/// the log.
pub struct JsonHistoryRepository {
    file: AtomicJsonFile<Vec<HistoryEntryDto>>,
}

impl JsonHistoryRepository {
    /// Creates a repository over the given log file.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a repository at the platform-default location
    /// (`~/.local/share/mukzi/history.json`).
    pub fn at_default_location() -> Result<Self, PathError> {
        Ok(Self::new(MukziPaths::history_file()?))
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryRepository {
    async fn append(&self, entry: &HistoryEntry) -> Result<()> {
        let dto = HistoryEntryDto::from_domain(entry)?;
        self.file
            .update(Vec::new(), move |rows| {
                rows.push(dto);
                Ok(())
            })
            .with_context(|| {
                format!("failed to append history entry to {:?}", self.file.path())
            })?;
        Ok(())
    }

    async fn read_all(&self, weekday: Option<Weekday>) -> Result<Vec<HistoryEntry>> {
        let rows = self
            .file
            .load()
            .with_context(|| format!("failed to read history log {:?}", self.file.path()))?
            .unwrap_or_default();

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_domain() {
                Ok(entry) => {
                    if weekday.is_none_or(|day| entry.weekday == day) {
                        entries.push(entry);
                    }
                }
                Err(err) => {
                    tracing::warn!("skipping unparseable history row: {err}");
                }
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn repository(temp_dir: &TempDir) -> JsonHistoryRepository {
        JsonHistoryRepository::new(temp_dir.path().join("history.json"))
    }

    #[tokio::test]
    async fn test_append_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let entry = HistoryEntry::query(Weekday::Fri, "치킨 먹고 싶다", Utc::now());
        repo.append(&entry).await.unwrap();

        let all = repo.read_all(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].raw_text, "치킨 먹고 싶다");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        assert!(repo.read_all(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_weekday_filter() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.append(&HistoryEntry::query(Weekday::Mon, "피자", Utc::now()))
            .await
            .unwrap();
        repo.append(&HistoryEntry::query(Weekday::Tue, "치킨", Utc::now()))
            .await
            .unwrap();

        let monday = repo.read_all(Some(Weekday::Mon)).await.unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].raw_text, "피자");
    }

    #[tokio::test]
    async fn test_appends_accumulate_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        for i in 0..5 {
            repo.append(&HistoryEntry::query(
                Weekday::Wed,
                format!("entry {i}"),
                Utc::now(),
            ))
            .await
            .unwrap();
        }

        let all = repo.read_all(None).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[4].raw_text, "entry 4");
    }

    #[tokio::test]
    async fn test_drives_recommendation_service_end_to_end() {
        use mukzi_core::recommend::RecommendationService;
        use mukzi_core::weather::WeatherReading;
        use std::sync::Arc;

        let temp_dir = TempDir::new().unwrap();
        let repo = Arc::new(repository(&temp_dir));

        repo.append(&HistoryEntry::query(Weekday::Fri, "금요일엔 역시 치킨", Utc::now()))
            .await
            .unwrap();
        repo.append(&HistoryEntry::confirmed_selection(
            Weekday::Fri,
            "치킨으로 확정",
            Utc::now(),
            "치킨",
            None,
        ))
        .await
        .unwrap();

        let service = RecommendationService::new(repo);
        let reading = WeatherReading {
            temperature_celsius: Some(22.0),
            humidity_percent: Some(50.0),
        };
        let result = service
            .recommend(&reading, 3, Some(Weekday::Fri))
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].category.name_localized, "치킨");

        // Identical inputs over an unchanged log yield identical output.
        let again = service
            .recommend(&reading, 3, Some(Weekday::Fri))
            .await
            .unwrap();
        assert_eq!(result, again);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[
                {"day": "Monday", "chat": "not json"},
                {"day": "Monday", "chat": "{\"id\":\"7f1a1e5e-0000-0000-0000-000000000000\",\"text\":\"우동\",\"timestamp\":1700000000000,\"kind\":\"query\"}"}
            ]"#,
        )
        .unwrap();

        let repo = JsonHistoryRepository::new(path);
        let all = repo.read_all(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].raw_text, "우동");
    }
}

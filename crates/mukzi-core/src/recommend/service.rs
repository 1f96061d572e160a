//! Top-level recommendation service.
//!
//! Wires the history store, the preference analyzer, and the integrated
//! scorer together. Upstream data problems (failed history read, missing
//! weather values) degrade to neutral defaults; only geometry/catalog
//! errors and invalid caller input propagate.

use crate::error::Result;
use crate::history::HistoryStore;
use crate::preference;
use crate::recommend::model::{SatietyLevel, ScoredCategory};
use crate::recommend::scorer;
use crate::weather::model::{WeatherConditions, WeatherReading};
use chrono::{Datelike, Local, Weekday};
use std::sync::Arc;

/// Produces ranked food-category recommendations from the three signals.
///
/// Stateless apart from the shared history store handle; safe to share
/// across request handlers.
pub struct RecommendationService {
    history: Arc<dyn HistoryStore>,
}

impl RecommendationService {
    /// Creates a service backed by the given history store.
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// Returns the top recommendations for the given raw weather reading
    /// and satiety level.
    ///
    /// `weekday` scopes the preference mining; it defaults to the current
    /// local weekday. A failed history read is absorbed: the scorer runs
    /// with an empty preference map and the result is still produced.
    ///
    /// # Errors
    ///
    /// - `MukziError::Validation` if `satiety_level` is not 1, 2, or 3.
    /// - `MukziError::InsufficientCategories` if the catalog is corrupted.
    pub async fn recommend(
        &self,
        reading: &WeatherReading,
        satiety_level: u8,
        weekday: Option<Weekday>,
    ) -> Result<Vec<ScoredCategory>> {
        let satiety = SatietyLevel::try_from(satiety_level)?;
        let conditions = WeatherConditions::from_reading(reading);
        self.recommend_with_conditions(&conditions, satiety, weekday)
            .await
    }

    /// [`Self::recommend`] for callers that already classified the
    /// weather (or substituted [`WeatherConditions::neutral`] after a
    /// failed weather lookup).
    pub async fn recommend_with_conditions(
        &self,
        conditions: &WeatherConditions,
        satiety: SatietyLevel,
        weekday: Option<Weekday>,
    ) -> Result<Vec<ScoredCategory>> {
        let weekday = weekday.unwrap_or_else(|| Local::now().weekday());

        let entries = match self.history.read_all(Some(weekday)).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("history read failed, scoring without preferences: {err}");
                Vec::new()
            }
        };
        let preferences = preference::analyze(&entries, weekday);
        tracing::debug!(
            ?weekday,
            entry_count = entries.len(),
            preference_count = preferences.len(),
            "scoring request"
        );

        scorer::calculate_top_categories(conditions, satiety, &preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedStore {
        entries: Vec<HistoryEntry>,
    }

    #[async_trait]
    impl HistoryStore for FixedStore {
        async fn append(&self, _entry: &HistoryEntry) -> anyhow::Result<()> {
            Ok(())
        }

        async fn read_all(&self, weekday: Option<Weekday>) -> anyhow::Result<Vec<HistoryEntry>> {
            Ok(self
                .entries
                .iter()
                .filter(|e| weekday.is_none_or(|d| e.weekday == d))
                .cloned()
                .collect())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl HistoryStore for FailingStore {
        async fn append(&self, _entry: &HistoryEntry) -> anyhow::Result<()> {
            Err(anyhow!("store down"))
        }

        async fn read_all(&self, _weekday: Option<Weekday>) -> anyhow::Result<Vec<HistoryEntry>> {
            Err(anyhow!("store down"))
        }
    }

    #[tokio::test]
    async fn test_recommend_uses_weekday_history() {
        let store = FixedStore {
            entries: vec![
                HistoryEntry::query(Weekday::Fri, "금요일엔 치킨", Utc::now()),
                HistoryEntry::query(Weekday::Fri, "치킨에 맥주", Utc::now()),
            ],
        };
        let service = RecommendationService::new(Arc::new(store));

        let reading = WeatherReading {
            temperature_celsius: Some(22.0),
            humidity_percent: Some(50.0),
        };
        let result = service
            .recommend(&reading, 3, Some(Weekday::Fri))
            .await
            .unwrap();
        assert_eq!(result[0].category.name_localized, "치킨");
    }

    #[tokio::test]
    async fn test_recommend_survives_store_failure() {
        let service = RecommendationService::new(Arc::new(FailingStore));
        let reading = WeatherReading {
            temperature_celsius: Some(32.0),
            humidity_percent: Some(80.0),
        };
        let result = service
            .recommend(&reading, 3, Some(Weekday::Fri))
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_recommend_rejects_bad_satiety() {
        let service = RecommendationService::new(Arc::new(FixedStore { entries: vec![] }));
        let err = service
            .recommend(&WeatherReading::default(), 5, Some(Weekday::Mon))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::MukziError::Validation(_)));
    }

    #[tokio::test]
    async fn test_neutral_conditions_path() {
        let service = RecommendationService::new(Arc::new(FixedStore { entries: vec![] }));
        let result = service
            .recommend_with_conditions(
                &WeatherConditions::neutral(),
                SatietyLevel::Moderate,
                Some(Weekday::Mon),
            )
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].rank, 1);
    }
}

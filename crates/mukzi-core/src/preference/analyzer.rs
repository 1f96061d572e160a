//! Historical preference mining.
//!
//! Derives a per-category affinity score for one weekday by counting
//! keyword hits of each category's trigger strings inside the free text
//! of that weekday's history entries.
//!
//! The analysis is O(entries × categories × keywords) and recomputed from
//! the full log on every request. There is no cache: freshness is worth
//! more than speed at this data volume, and the function only reads its
//! inputs, so concurrent calls need no coordination.

use crate::catalog::{keywords, table};
use crate::history::HistoryEntry;
use chrono::Weekday;
use std::collections::HashMap;

/// Per-category affinity scores for one weekday, keyed by localized
/// category name. Values are in [0, 10]; zero-hit categories are absent.
pub type PreferenceMap = HashMap<String, f64>;

/// Upper bound of the normalized affinity scale.
pub const MAX_AFFINITY: f64 = 10.0;

/// Mines the history log for the given weekday.
///
/// The category with the most hits always scores exactly
/// [`MAX_AFFINITY`]; the rest scale linearly. No entries for the weekday
/// (or no keyword hits at all) yields an empty map. Entries with blank
/// text are skipped, never fatal.
pub fn analyze(entries: &[HistoryEntry], weekday: Weekday) -> PreferenceMap {
    let mut hits: HashMap<&'static str, usize> = HashMap::new();

    for entry in entries.iter().filter(|e| e.weekday == weekday) {
        let text = entry.raw_text.trim();
        if text.is_empty() {
            tracing::debug!(entry_id = %entry.id, "skipping history entry with blank text");
            continue;
        }
        for category in table::all() {
            let count: usize = keywords::triggers_for(category)
                .iter()
                .map(|keyword| text.matches(keyword).count())
                .sum();
            if count > 0 {
                *hits.entry(category.name_localized).or_insert(0) += count;
            }
        }
    }

    let Some(&max_hits) = hits.values().max() else {
        return PreferenceMap::new();
    };

    hits.into_iter()
        .map(|(name, count)| {
            (
                name.to_string(),
                count as f64 / max_hits as f64 * MAX_AFFINITY,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(weekday: Weekday, text: &str) -> HistoryEntry {
        HistoryEntry::query(weekday, text, Utc::now())
    }

    #[test]
    fn test_top_category_scores_exactly_max() {
        let entries = vec![
            entry(Weekday::Fri, "점심에 치킨 먹고 싶다"),
            entry(Weekday::Fri, "치킨 시킬까 피자 시킬까"),
            entry(Weekday::Fri, "역시 치킨이지"),
        ];
        let prefs = analyze(&entries, Weekday::Fri);
        assert_eq!(prefs.get("치킨").copied(), Some(MAX_AFFINITY));
        let pizza = prefs.get("피자").copied().unwrap();
        assert!((pizza - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_hit_categories_absent() {
        let entries = vec![entry(Weekday::Mon, "김치찌개 최고")];
        let prefs = analyze(&entries, Weekday::Mon);
        assert!(prefs.contains_key("한식")); // 김치
        assert!(prefs.contains_key("찜·탕")); // 찌개
        assert!(!prefs.contains_key("피자"));
        assert!(!prefs.contains_key("샐러드"));
    }

    #[test]
    fn test_weekday_filter() {
        let entries = vec![
            entry(Weekday::Mon, "월요일은 피자"),
            entry(Weekday::Tue, "화요일은 치킨"),
        ];
        let prefs = analyze(&entries, Weekday::Mon);
        assert!(prefs.contains_key("피자"));
        assert!(!prefs.contains_key("치킨"));
    }

    #[test]
    fn test_no_entries_yields_empty_map() {
        assert!(analyze(&[], Weekday::Sun).is_empty());

        let entries = vec![entry(Weekday::Mon, "피자")];
        assert!(analyze(&entries, Weekday::Sun).is_empty());
    }

    #[test]
    fn test_blank_text_skipped() {
        let entries = vec![entry(Weekday::Wed, "   "), entry(Weekday::Wed, "우동 먹자")];
        let prefs = analyze(&entries, Weekday::Wed);
        assert_eq!(prefs.get("일식").copied(), Some(MAX_AFFINITY));
    }

    #[test]
    fn test_synonyms_accumulate() {
        let entries = vec![entry(Weekday::Thu, "불고기에 된장찌개, 김치도 곁들여서")];
        let prefs = analyze(&entries, Weekday::Thu);
        // 불고기 + 된장 + 김치 = 3 hits for 한식, beating 찌개's single hit.
        assert_eq!(prefs.get("한식").copied(), Some(MAX_AFFINITY));
        let stew = prefs.get("찜·탕").copied().unwrap();
        assert!((stew - 10.0 / 3.0).abs() < 1e-9);
    }
}

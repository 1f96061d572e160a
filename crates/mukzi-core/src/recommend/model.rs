//! Recommendation output and request models.

use crate::catalog::FoodCategory;
use crate::error::MukziError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A catalog category with its computed score, rank, and justification.
///
/// Created fresh per scoring invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCategory {
    pub category: FoodCategory,
    /// Total score; finite and non-negative.
    pub score: f64,
    /// 1-based rank, assigned after sorting.
    pub rank: u32,
    /// Human-readable justification of every contributing term.
    pub reason: String,
}

/// How hungry the requesting user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatietyLevel {
    /// 1 - just ate, barely hungry.
    Full,
    /// 2 - could eat.
    Moderate,
    /// 3 - very hungry.
    VeryHungry,
}

impl SatietyLevel {
    /// The wire-level integer for this level.
    pub fn level(&self) -> u8 {
        match self {
            Self::Full => 1,
            Self::Moderate => 2,
            Self::VeryHungry => 3,
        }
    }
}

impl TryFrom<u8> for SatietyLevel {
    type Error = MukziError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Full),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::VeryHungry),
            other => Err(MukziError::validation(format!(
                "satiety level must be 1-3, got {other}"
            ))),
        }
    }
}

/// Sorts by score descending, ties broken by category id ascending, then
/// assigns contiguous 1-based ranks.
///
/// Scores are finite by construction, so the partial comparison cannot
/// actually fall through to `Equal` for non-equal values.
pub(crate) fn sort_and_rank(categories: &mut [ScoredCategory]) {
    categories.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.id.cmp(&b.category.id))
    });
    for (index, scored) in categories.iter_mut().enumerate() {
        scored.rank = (index + 1) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::table;

    fn scored(id: u32, score: f64) -> ScoredCategory {
        ScoredCategory {
            category: *table::find_by_id(id).unwrap(),
            score,
            rank: 0,
            reason: String::new(),
        }
    }

    #[test]
    fn test_satiety_level_round_trip() {
        for value in 1..=3u8 {
            assert_eq!(SatietyLevel::try_from(value).unwrap().level(), value);
        }
        assert!(SatietyLevel::try_from(0).is_err());
        assert!(SatietyLevel::try_from(4).is_err());
    }

    #[test]
    fn test_sort_and_rank_orders_by_score_then_id() {
        let mut list = vec![scored(3, 5.0), scored(1, 7.0), scored(2, 5.0)];
        sort_and_rank(&mut list);

        assert_eq!(list[0].category.id, 1);
        assert_eq!(list[1].category.id, 2); // ties break toward lower id
        assert_eq!(list[2].category.id, 3);
        assert_eq!(
            list.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}

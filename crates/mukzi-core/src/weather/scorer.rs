//! Weather-only category scoring.
//!
//! Scores every catalog category by how well its serving temperature
//! matches the current humidity, using a fixed 3×3 matrix:
//!
//! | humidity \ serving | cold | warm | hot |
//! |--------------------|------|------|-----|
//! | high               | 3    | 2    | 1   |
//! | moderate           | 2    | 3    | 2   |
//! | low                | 1    | 2    | 3   |

use crate::catalog::{FoodCategory, ServeTemperature, table};
use crate::recommend::model::{ScoredCategory, sort_and_rank};
use crate::weather::model::{HumidityClass, WeatherConditions};

/// The matrix score for one category, with `HotOrCold` resolved to the
/// side that actually scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub score: u8,
    /// The serving temperature the score was taken for. Equals the
    /// category's own serving temperature except for `HotOrCold`, where
    /// it records which side won.
    pub resolved: ServeTemperature,
}

fn matrix(humidity: HumidityClass, serve: ServeTemperature) -> u8 {
    match (humidity, serve) {
        (HumidityClass::High, ServeTemperature::Cold) => 3,
        (HumidityClass::High, ServeTemperature::Warm) => 2,
        (HumidityClass::High, ServeTemperature::Hot) => 1,
        (HumidityClass::Moderate, ServeTemperature::Cold) => 2,
        (HumidityClass::Moderate, ServeTemperature::Warm) => 3,
        (HumidityClass::Moderate, ServeTemperature::Hot) => 2,
        (HumidityClass::Low, ServeTemperature::Cold) => 1,
        (HumidityClass::Low, ServeTemperature::Warm) => 2,
        (HumidityClass::Low, ServeTemperature::Hot) => 3,
        // HotOrCold is resolved by match_score before reaching here.
        (_, ServeTemperature::HotOrCold) => unreachable!("resolved in match_score"),
    }
}

/// Scores one serving temperature against the current humidity.
///
/// `HotOrCold` takes the better of its cold and warm sides; the winning
/// side is recorded in `resolved` so the reason text can report it.
pub fn match_score(humidity: HumidityClass, serve: ServeTemperature) -> MatchScore {
    match serve {
        ServeTemperature::HotOrCold => {
            let cold = matrix(humidity, ServeTemperature::Cold);
            let warm = matrix(humidity, ServeTemperature::Warm);
            if cold >= warm {
                MatchScore {
                    score: cold,
                    resolved: ServeTemperature::Cold,
                }
            } else {
                MatchScore {
                    score: warm,
                    resolved: ServeTemperature::Warm,
                }
            }
        }
        other => MatchScore {
            score: matrix(humidity, other),
            resolved: other,
        },
    }
}

fn reason_for(category: &FoodCategory, humidity: HumidityClass, matched: MatchScore) -> String {
    if category.serve_temperature == ServeTemperature::HotOrCold {
        format!(
            "{} humidity, scored as {} serving ({}pt)",
            humidity, matched.resolved, matched.score
        )
    } else {
        format!(
            "{} humidity against {} serving ({}pt)",
            humidity, matched.resolved, matched.score
        )
    }
}

/// Scores the whole catalog against the current weather.
///
/// Output is sorted by score descending, ties broken by category id
/// ascending, with contiguous 1-based ranks.
pub fn score_catalog(conditions: &WeatherConditions) -> Vec<ScoredCategory> {
    let humidity = conditions.humidity_class;
    let mut scored: Vec<ScoredCategory> = table::all()
        .iter()
        .map(|category| {
            let matched = match_score(humidity, category.serve_temperature);
            ScoredCategory {
                category: *category,
                score: matched.score as f64,
                rank: 0,
                reason: reason_for(category, humidity, matched),
            }
        })
        .collect();
    sort_and_rank(&mut scored);
    scored
}

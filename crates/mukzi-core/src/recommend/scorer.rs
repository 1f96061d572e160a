//! Integrated multi-signal scoring.
//!
//! Combines weather affinity, per-weekday history affinity, and a satiety
//! weighting into one additive score per catalog category, then ranks and
//! returns the top results. All terms are independently capped; the final
//! score is clamped at zero. Equal totals rank by category id ascending,
//! matching the weather-matrix scorer.
//!
//! Scoring never fails for missing upstream data: absent weather values
//! classify to the neutral bucket and an empty preference map simply
//! contributes nothing.

use crate::catalog::{FoodCategory, ServeTemperature, table};
use crate::error::{MukziError, Result};
use crate::preference::{MAX_AFFINITY, PreferenceMap};
use crate::recommend::appetite::{AppetiteClass, appetite_class};
use crate::recommend::model::{SatietyLevel, ScoredCategory, sort_and_rank};
use crate::weather::model::{HumidityClass, TemperatureClass, WeatherConditions};

/// Number of categories the public contract returns.
pub const DEFAULT_TOP_N: usize = 2;

/// Flat score floor granted to every category.
const BASE_SCORE: f64 = 10.0;

// Weather term (≤ 25 in total).
const HOT_WEATHER_COLD_SERVE: f64 = 15.0;
const HOT_WEATHER_EITHER_SERVE: f64 = 12.0;
const COLD_WEATHER_HOT_SERVE: f64 = 15.0;
const COLD_WEATHER_STEW_BONUS: f64 = 2.0;
const COLD_WEATHER_KOREAN_BONUS: f64 = 1.0;
const MODERATE_WEATHER_WARM_SERVE: f64 = 9.0;
const HUMIDITY_PICK_POINTS: f64 = 10.0;

/// Categories lifted by high humidity (fresh, cold, light on the stomach).
const HIGH_HUMIDITY_PICKS: &[&str] = &["샐러드", "회·초밥", "디저트"];
/// Categories lifted by dry air (broths and hot drinks).
const LOW_HUMIDITY_PICKS: &[&str] = &["찜·탕", "죽", "커피·차"];
/// Soup/stew-style categories that get the extra cold-weather bump.
const STEW_STYLE: &[&str] = &["찜·탕", "죽"];

// History term (≤ 50).
const HISTORY_POINTS: f64 = 50.0;

// Satiety term (≤ 30, with penalty).
const VERY_HUNGRY_HEARTY: f64 = 30.0;
const VERY_HUNGRY_MODERATE: f64 = 15.0;
const MODERATE_HUNGER_MODERATE: f64 = 25.0;
const MODERATE_HUNGER_HEARTY: f64 = 15.0;
const MODERATE_HUNGER_LIGHT: f64 = 10.0;
const FULL_LIGHT: f64 = 30.0;
const FULL_MODERATE: f64 = 10.0;
const FULL_HEARTY_PENALTY: f64 = -25.0;

fn temperature_term(
    category: &FoodCategory,
    temperature: TemperatureClass,
) -> (f64, Option<String>) {
    match temperature {
        TemperatureClass::Hot => match category.serve_temperature {
            ServeTemperature::Cold => (
                HOT_WEATHER_COLD_SERVE,
                Some(format!("cold dish for hot weather (+{HOT_WEATHER_COLD_SERVE})")),
            ),
            ServeTemperature::HotOrCold => (
                HOT_WEATHER_EITHER_SERVE,
                Some(format!(
                    "can be served cold in hot weather (+{HOT_WEATHER_EITHER_SERVE})"
                )),
            ),
            _ => (0.0, None),
        },
        TemperatureClass::Cold => match category.serve_temperature {
            ServeTemperature::Hot => {
                let mut points = COLD_WEATHER_HOT_SERVE;
                if STEW_STYLE.contains(&category.name_localized) {
                    points += COLD_WEATHER_STEW_BONUS;
                } else if category.name_localized == "한식" {
                    points += COLD_WEATHER_KOREAN_BONUS;
                }
                (points, Some(format!("hot dish for cold weather (+{points})")))
            }
            _ => (0.0, None),
        },
        TemperatureClass::Moderate => match category.serve_temperature {
            ServeTemperature::Warm => (
                MODERATE_WEATHER_WARM_SERVE,
                Some(format!(
                    "warm dish for mild weather (+{MODERATE_WEATHER_WARM_SERVE})"
                )),
            ),
            _ => (0.0, None),
        },
    }
}

fn humidity_term(category: &FoodCategory, humidity: HumidityClass) -> (f64, Option<String>) {
    match humidity {
        HumidityClass::High if HIGH_HUMIDITY_PICKS.contains(&category.name_localized) => (
            HUMIDITY_PICK_POINTS,
            Some(format!("refreshing on a humid day (+{HUMIDITY_PICK_POINTS})")),
        ),
        HumidityClass::Low if LOW_HUMIDITY_PICKS.contains(&category.name_localized) => (
            HUMIDITY_PICK_POINTS,
            Some(format!("comforting in dry air (+{HUMIDITY_PICK_POINTS})")),
        ),
        _ => (0.0, None),
    }
}

fn history_term(category: &FoodCategory, preferences: &PreferenceMap) -> (f64, Option<String>) {
    match preferences.get(category.name_localized) {
        Some(&affinity) if affinity > 0.0 => {
            let points = affinity / MAX_AFFINITY * HISTORY_POINTS;
            (
                points,
                Some(format!("often chosen on this weekday (+{points:.1})")),
            )
        }
        _ => (0.0, None),
    }
}

fn satiety_term(category: &FoodCategory, satiety: SatietyLevel) -> (f64, Option<String>) {
    let Some(class) = appetite_class(category) else {
        return (0.0, None);
    };
    match (satiety, class) {
        (SatietyLevel::VeryHungry, AppetiteClass::Hearty) => (
            VERY_HUNGRY_HEARTY,
            Some(format!("hearty pick for an empty stomach (+{VERY_HUNGRY_HEARTY})")),
        ),
        (SatietyLevel::VeryHungry, AppetiteClass::Moderate) => (
            VERY_HUNGRY_MODERATE,
            Some(format!("filling enough when very hungry (+{VERY_HUNGRY_MODERATE})")),
        ),
        (SatietyLevel::Moderate, AppetiteClass::Moderate) => (
            MODERATE_HUNGER_MODERATE,
            Some(format!("right-sized for moderate hunger (+{MODERATE_HUNGER_MODERATE})")),
        ),
        (SatietyLevel::Moderate, AppetiteClass::Hearty) => (
            MODERATE_HUNGER_HEARTY,
            Some(format!("a solid option for moderate hunger (+{MODERATE_HUNGER_HEARTY})")),
        ),
        (SatietyLevel::Moderate, AppetiteClass::Light) => (
            MODERATE_HUNGER_LIGHT,
            Some(format!("light option for moderate hunger (+{MODERATE_HUNGER_LIGHT})")),
        ),
        (SatietyLevel::Full, AppetiteClass::Light) => (
            FULL_LIGHT,
            Some(format!("light pick right after a meal (+{FULL_LIGHT})")),
        ),
        (SatietyLevel::Full, AppetiteClass::Moderate) => (
            FULL_MODERATE,
            Some(format!("manageable on a full stomach (+{FULL_MODERATE})")),
        ),
        (SatietyLevel::Full, AppetiteClass::Hearty) => (
            FULL_HEARTY_PENALTY,
            Some(format!("too heavy right after a meal ({FULL_HEARTY_PENALTY})")),
        ),
        (SatietyLevel::VeryHungry, AppetiteClass::Light) => (0.0, None),
    }
}

fn score_category(
    category: &FoodCategory,
    conditions: &WeatherConditions,
    satiety: SatietyLevel,
    preferences: &PreferenceMap,
) -> ScoredCategory {
    let mut score = BASE_SCORE;
    let mut reasons = vec![format!("base (+{BASE_SCORE})")];

    for (points, reason) in [
        temperature_term(category, conditions.temperature_class),
        humidity_term(category, conditions.humidity_class),
        history_term(category, preferences),
        satiety_term(category, satiety),
    ] {
        score += points;
        if let Some(reason) = reason {
            reasons.push(reason);
        }
    }

    ScoredCategory {
        category: *category,
        score: score.max(0.0),
        rank: 0,
        reason: reasons.join("; "),
    }
}

/// Produces the final ranked recommendation.
///
/// Scores every catalog category, sorts by total score descending (ties
/// by id ascending), and returns the top [`DEFAULT_TOP_N`] with 1-based
/// ranks and per-term reason strings.
///
/// # Errors
///
/// - `MukziError::InsufficientCategories` if the catalog holds fewer than
///   [`DEFAULT_TOP_N`] entries. This cannot occur with the built-in
///   catalog and indicates corruption.
pub fn calculate_top_categories(
    conditions: &WeatherConditions,
    satiety: SatietyLevel,
    preferences: &PreferenceMap,
) -> Result<Vec<ScoredCategory>> {
    calculate_top_n(conditions, satiety, preferences, DEFAULT_TOP_N)
}

/// [`calculate_top_categories`] with a caller-chosen result size.
pub fn calculate_top_n(
    conditions: &WeatherConditions,
    satiety: SatietyLevel,
    preferences: &PreferenceMap,
    top_n: usize,
) -> Result<Vec<ScoredCategory>> {
    let catalog = table::all();
    if catalog.len() < top_n {
        return Err(MukziError::insufficient_categories(catalog.len()));
    }

    let mut scored: Vec<ScoredCategory> = catalog
        .iter()
        .map(|category| score_category(category, conditions, satiety, preferences))
        .collect();
    sort_and_rank(&mut scored);
    scored.truncate(top_n);
    Ok(scored)
}

//! Food category domain model.

use serde::{Deserialize, Serialize};

/// The temperature at which a category is typically served.
///
/// Drives the humidity/serve-temperature scoring matrix; `HotOrCold`
/// categories (e.g. coffee) are scored as whichever of their two sides
/// matches the weather better.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum ServeTemperature {
    Hot,
    Warm,
    Cold,
    HotOrCold,
}

/// A food category from the fixed catalog.
///
/// The catalog is a process-wide constant table: entries are created at
/// compile time, never mutated, never deleted. `name_localized` is the
/// key used by the keyword, appetite, and weather-affinity lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodCategory {
    /// Unique, stable identifier.
    pub id: u32,
    /// English label.
    pub name: &'static str,
    /// Localized (Korean) label; the canonical lookup key.
    pub name_localized: &'static str,
    /// Typical serving temperature.
    pub serve_temperature: ServeTemperature,
    /// One-line description.
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_temperature_display() {
        assert_eq!(ServeTemperature::Hot.to_string(), "hot");
        assert_eq!(ServeTemperature::HotOrCold.to_string(), "hot-or-cold");
    }
}

//! Weather reading and classified-conditions models.

use serde::{Deserialize, Serialize};

/// Three-bucket temperature classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum TemperatureClass {
    Hot,
    Moderate,
    Cold,
}

/// Three-bucket humidity classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum HumidityClass {
    High,
    Moderate,
    Low,
}

/// The already-parsed output of the external weather collaborator.
///
/// `None` values are valid and mean "unknown"; classification maps them
/// to the neutral bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
}

/// Classified weather conditions for one scoring request. Ephemeral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature_class: TemperatureClass,
    pub humidity_class: HumidityClass,
    pub actual_temperature: Option<f64>,
    pub actual_humidity: Option<f64>,
}

impl WeatherConditions {
    /// Classifies a raw reading into scoring buckets.
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            temperature_class: super::classifier::classify_temperature(
                reading.temperature_celsius,
            ),
            humidity_class: super::classifier::classify_humidity(reading.humidity_percent),
            actual_temperature: reading.temperature_celsius,
            actual_humidity: reading.humidity_percent,
        }
    }

    /// Neutral conditions (moderate/moderate), used when the weather
    /// lookup failed upstream.
    pub fn neutral() -> Self {
        Self {
            temperature_class: TemperatureClass::Moderate,
            humidity_class: HumidityClass::Moderate,
            actual_temperature: None,
            actual_humidity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reading() {
        let conditions = WeatherConditions::from_reading(&WeatherReading {
            temperature_celsius: Some(32.0),
            humidity_percent: Some(80.0),
        });
        assert_eq!(conditions.temperature_class, TemperatureClass::Hot);
        assert_eq!(conditions.humidity_class, HumidityClass::High);
        assert_eq!(conditions.actual_temperature, Some(32.0));
    }

    #[test]
    fn test_neutral() {
        let conditions = WeatherConditions::neutral();
        assert_eq!(conditions.temperature_class, TemperatureClass::Moderate);
        assert_eq!(conditions.humidity_class, HumidityClass::Moderate);
        assert!(conditions.actual_temperature.is_none());
    }
}

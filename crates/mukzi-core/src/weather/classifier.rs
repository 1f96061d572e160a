//! Quantizes continuous weather readings into scoring buckets.
//!
//! Both classifiers are total: `None` is a valid input meaning "unknown"
//! and maps to the neutral bucket. Boundaries are inclusive on the lower
//! bound of each bucket.

use super::model::{HumidityClass, TemperatureClass};

/// Temperature at or above which weather counts as hot, in °C.
const HOT_THRESHOLD_CELSIUS: f64 = 28.0;
/// Temperature below which weather counts as cold, in °C.
const COLD_THRESHOLD_CELSIUS: f64 = 18.0;
/// Relative humidity at or above which weather counts as humid, in %.
const HIGH_HUMIDITY_PERCENT: f64 = 70.0;
/// Relative humidity below which weather counts as dry, in %.
const LOW_HUMIDITY_PERCENT: f64 = 40.0;

/// Classifies a temperature reading.
pub fn classify_temperature(celsius: Option<f64>) -> TemperatureClass {
    match celsius {
        None => TemperatureClass::Moderate,
        Some(t) if t < COLD_THRESHOLD_CELSIUS => TemperatureClass::Cold,
        Some(t) if t < HOT_THRESHOLD_CELSIUS => TemperatureClass::Moderate,
        Some(_) => TemperatureClass::Hot,
    }
}

/// Classifies a relative-humidity reading.
pub fn classify_humidity(percent: Option<f64>) -> HumidityClass {
    match percent {
        None => HumidityClass::Moderate,
        Some(h) if h < LOW_HUMIDITY_PERCENT => HumidityClass::Low,
        Some(h) if h < HIGH_HUMIDITY_PERCENT => HumidityClass::Moderate,
        Some(_) => HumidityClass::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_temperature() {
        assert_eq!(classify_temperature(None), TemperatureClass::Moderate);
        assert_eq!(classify_temperature(Some(-5.0)), TemperatureClass::Cold);
        assert_eq!(classify_temperature(Some(17.999)), TemperatureClass::Cold);
        assert_eq!(classify_temperature(Some(18.0)), TemperatureClass::Moderate);
        assert_eq!(classify_temperature(Some(27.999)), TemperatureClass::Moderate);
        assert_eq!(classify_temperature(Some(28.0)), TemperatureClass::Hot);
        assert_eq!(classify_temperature(Some(35.0)), TemperatureClass::Hot);
    }

    #[test]
    fn test_classify_humidity() {
        assert_eq!(classify_humidity(None), HumidityClass::Moderate);
        assert_eq!(classify_humidity(Some(10.0)), HumidityClass::Low);
        assert_eq!(classify_humidity(Some(39.999)), HumidityClass::Low);
        assert_eq!(classify_humidity(Some(40.0)), HumidityClass::Moderate);
        assert_eq!(classify_humidity(Some(69.999)), HumidityClass::Moderate);
        assert_eq!(classify_humidity(Some(70.0)), HumidityClass::High);
        assert_eq!(classify_humidity(Some(95.0)), HumidityClass::High);
    }
}

// src/io/weather.rs

use crate::error::{RebalanceError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Current conditions for a city. Only `temperature` drives the forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    pub city: String,
    /// Sky condition as reported, e.g. "Clear" or "Rain".
    pub condition: String,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl WeatherReading {
    pub fn new(city: impl Into<String>, condition: impl Into<String>, temperature: f64) -> Self {
        Self {
            city: city.into(),
            condition: condition.into(),
            temperature,
        }
    }
}

/// Anything that can report the weather for a city.
pub trait WeatherSource {
    /// Fails with [`RebalanceError::WeatherUnavailable`] for unknown cities
    /// or unusable readings.
    fn current(&self, city: &str) -> Result<WeatherReading>;
}

/// Fixed in-memory table of readings, keyed case-insensitively by city.
#[derive(Debug, Clone, Default)]
pub struct StaticWeather {
    readings: HashMap<String, (String, f64)>,
}

impl StaticWeather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: &str, condition: &str, temperature: f64) -> Self {
        self.readings
            .insert(normalize(city), (condition.to_string(), temperature));
        self
    }

    /// A handful of cities for the demo binary.
    pub fn demo() -> Self {
        Self::new()
            .with_city("Hyderabad", "Clear", 33.5)
            .with_city("Mumbai", "Rain", 28.0)
            .with_city("London", "Clouds", 12.0)
            .with_city("Oslo", "Snow", -3.0)
            .with_city("Lisbon", "Clear", 21.0)
    }
}

fn normalize(city: &str) -> String {
    city.trim().to_lowercase()
}

impl WeatherSource for StaticWeather {
    fn current(&self, city: &str) -> Result<WeatherReading> {
        let unavailable = || RebalanceError::WeatherUnavailable {
            city: city.to_string(),
        };

        if city.trim().is_empty() {
            return Err(unavailable());
        }

        let (condition, temperature) = self.readings.get(&normalize(city)).ok_or_else(unavailable)?;
        if !temperature.is_finite() {
            return Err(unavailable());
        }

        Ok(WeatherReading::new(city.trim(), condition.clone(), *temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let weather = StaticWeather::new().with_city("Hyderabad", "Clear", 33.5);
        let reading = weather.current("  HYDERABAD ").unwrap();
        assert_eq!(reading.condition, "Clear");
        assert_eq!(reading.temperature, 33.5);
        assert_eq!(reading.city, "HYDERABAD");
    }

    #[test]
    fn test_unknown_or_blank_city_is_unavailable() {
        let weather = StaticWeather::demo();
        assert!(matches!(
            weather.current("Atlantis"),
            Err(RebalanceError::WeatherUnavailable { .. })
        ));
        assert!(weather.current("").is_err());
    }

    #[test]
    fn test_non_finite_reading_is_unavailable() {
        let weather = StaticWeather::new().with_city("Nowhere", "Clear", f64::NAN);
        assert!(weather.current("Nowhere").is_err());
    }
}

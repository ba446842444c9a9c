//! Weather snapshot and the subset of the OpenWeatherMap payload it is built from.

use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Current conditions for one city, created per request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees in the requested units (Celsius for `metric`).
    pub temperature: f64,
    /// Provider text in the requested language, e.g. "облачно".
    pub description: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Meters per second for `metric`.
    pub wind_speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: Option<f64>,
}

impl CurrentWeatherResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let main = self
            .main
            .ok_or_else(|| WeatherError::Malformed("missing `main`".to_string()))?;
        let temperature = main
            .temp
            .ok_or_else(|| WeatherError::Malformed("missing `main.temp`".to_string()))?;
        let humidity = main
            .humidity
            .ok_or_else(|| WeatherError::Malformed("missing `main.humidity`".to_string()))?;
        let description = self
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description)
            .ok_or_else(|| {
                WeatherError::Malformed("missing `weather[0].description`".to_string())
            })?;
        let wind_speed = self
            .wind
            .and_then(|w| w.speed)
            .ok_or_else(|| WeatherError::Malformed("missing `wind.speed`".to_string()))?;

        Ok(WeatherSnapshot {
            temperature,
            description,
            humidity,
            wind_speed,
        })
    }
}

/// Parses a response body into a snapshot; any shape problem is reported as [`WeatherError::Malformed`].
pub(crate) fn parse_snapshot(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let raw: CurrentWeatherResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;
    raw.into_snapshot()
}

//! OpenWeatherMap current-weather client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::error::WeatherError;
use crate::types::{parse_snapshot, WeatherSnapshot};
use crate::WeatherProvider;

/// Default "current weather" endpoint.
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap client. Sends `q`, `appid`, `units` and `lang` as query parameters.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl OpenWeatherClient {
    /// Client for the public endpoint with metric units and Russian descriptions.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: OPENWEATHER_API_BASE.to_string(),
            api_key,
            units: "metric".to_string(),
            lang: "ru".to_string(),
        }
    }

    /// Points the client at another endpoint (proxy, mock server).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_units(mut self, units: String) -> Self {
        self.units = units;
        self
    }

    pub fn with_lang(mut self, lang: String) -> Self {
        self.lang = lang;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

/// Masks an API key for logs: first 4 and last 2 characters kept, "***" for short keys.
pub(crate) fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self), fields(units = %self.units, lang = %self.lang))]
    async fn fetch(&self, city_query: &str) -> Result<WeatherSnapshot, WeatherError> {
        info!(
            city_query = %city_query,
            base_url = %self.base_url,
            api_key = %mask_key(&self.api_key),
            "step: weather request"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city_query),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(city_query = %city_query, status = %status, "Weather API returned error status");
            return Err(WeatherError::Status { status, body });
        }

        let body = response.text().await?;
        let snapshot = parse_snapshot(&body)?;

        info!(
            city_query = %city_query,
            temperature = snapshot.temperature,
            humidity = snapshot.humidity,
            wind_speed = snapshot.wind_speed,
            "step: weather request done"
        );
        Ok(snapshot)
    }
}

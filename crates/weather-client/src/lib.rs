//! # weather-client
//!
//! Current-weather lookup for the bot.
//!
//! [`WeatherProvider`] is the seam the conversation handler depends on; [`OpenWeatherClient`] implements it
//! against the OpenWeatherMap "current weather" endpoint. One GET per call, no retries and no caching:
//! every error is final for the request that triggered it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use weather_client::{OpenWeatherClient, WeatherProvider};
//!
//! async fn example() -> Result<(), weather_client::WeatherError> {
//!     let client = OpenWeatherClient::new("your-api-key".to_string());
//!     let snapshot = client.fetch("Moscow").await?;
//!     println!("{}°C, {}", snapshot.temperature, snapshot.description);
//!     Ok(())
//! }
//! ```

mod error;
mod openweather;
mod types;

pub use error::WeatherError;
pub use openweather::{OpenWeatherClient, OPENWEATHER_API_BASE};
pub use types::WeatherSnapshot;

use async_trait::async_trait;

/// Source of current weather for a provider-specific city query (e.g. "Moscow").
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches a fresh snapshot. Any error means "no data" for this request.
    async fn fetch(&self, city_query: &str) -> Result<WeatherSnapshot, WeatherError>;
}

//! Bot configuration: Telegram connection + log file (from dbot-telegram) and weather provider settings. Loaded from env.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;
use weather_client::OPENWEATHER_API_BASE;

use crate::handlers::Pacing;

const DEFAULT_LOG_FILE: &str = "logs/weather-bot.log";

/// Weather provider and reply pacing settings.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// OWM_API_KEY or WEATHER_API_KEY
    pub api_key: String,
    /// WEATHER_API_URL
    pub api_url: String,
    /// WEATHER_UNITS
    pub units: String,
    /// WEATHER_LANG
    pub lang: String,
    /// WEATHER_DELAY_SECS / ADVICE_DELAY_SECS
    pub pacing: Pacing,
}

impl WeatherConfig {
    pub fn load() -> Result<Self> {
        let api_key = env::var("OWM_API_KEY")
            .or_else(|_| env::var("WEATHER_API_KEY"))
            .map_err(|_| anyhow::anyhow!("OWM_API_KEY (or WEATHER_API_KEY) not set"))?;
        let api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| OPENWEATHER_API_BASE.to_string());
        let units = env::var("WEATHER_UNITS").unwrap_or_else(|_| "metric".to_string());
        let lang = env::var("WEATHER_LANG").unwrap_or_else(|_| "ru".to_string());

        let defaults = Pacing::default();
        let pacing = Pacing {
            before_weather: secs_from_env("WEATHER_DELAY_SECS").unwrap_or(defaults.before_weather),
            before_advice: secs_from_env("ADVICE_DELAY_SECS").unwrap_or(defaults.before_advice),
        };

        Ok(Self {
            api_key,
            api_url,
            units,
            lang,
            pacing,
        })
    }
}

fn secs_from_env(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE, default logs/weather-bot.log
    pub log_file: String,
    pub weather: WeatherConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = telegram
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let weather = WeatherConfig::load()?;
        Ok(Self {
            telegram,
            log_file,
            weather,
        })
    }

    /// Rejects empty secrets and malformed URLs.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.weather.api_key.trim().is_empty() {
            anyhow::bail!("OWM_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.weather.api_url).is_err() {
            anyhow::bail!(
                "WEATHER_API_URL is not a valid URL: {}",
                self.weather.api_url
            );
        }
        Ok(())
    }
}

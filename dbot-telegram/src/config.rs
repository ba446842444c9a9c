//! Minimal framework config: token, API URL, log path.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::{Context, Result};
use std::env;
use tracing::info;

/// Telegram connection and logging settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; one of them is required.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Rejects an empty token or a malformed API URL.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide client, pointed at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                info!(api_url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config(token: &str, api_url: Option<&str>) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.to_string(),
            telegram_api_url: api_url.map(str::to_string),
            log_file: None,
        }
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        assert!(config("test_token", None).validate().is_ok());
        assert!(config("   ", None).validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_token_override_and_api_url() {
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");
        env::remove_var("LOG_FILE");

        let config = TelegramConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert!(config.validate().is_ok());
        assert!(config.build_bot().is_ok());

        env::remove_var("BOT_TOKEN");
        env::remove_var("TELEGRAM_API_URL");
    }

    #[test]
    #[serial]
    fn test_load_without_token_fails() {
        env::remove_var("BOT_TOKEN");
        assert!(TelegramConfig::load(None).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = config("t", Some("not a url"));
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }
}

//! # Weather bot application
//!
//! Telegram bot that offers a menu of supported cities and, for the chosen one, replies with a short
//! description, the current weather and tourist advice. Wires dbot-core, handler-chain, dbot-telegram
//! and weather-client; loads config from env and runs the dispatcher.

pub mod catalog;
pub mod cities;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod replies;
pub mod runner;

pub use catalog::Catalog;
pub use cities::{callback_data, parse_callback_data, City, CityRegistry, RegistryError};
pub use cli::{load_config, Cli, Commands};
pub use config::{BotConfig, WeatherConfig};
pub use handlers::{is_start_command, CityWeatherHandler, LoggingHandler, Pacing};
pub use runner::{build_handler_chain, build_weather_client, run_bot};

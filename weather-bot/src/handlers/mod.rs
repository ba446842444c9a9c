//! Handlers in the bot's chain: event logging and the city weather conversation.

mod city_weather;
mod logging;

pub use city_weather::{is_start_command, CityWeatherHandler, Pacing};
pub use logging::LoggingHandler;

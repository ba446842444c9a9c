//! Wiring: builds the handler chain from config and runs the Telegram dispatcher.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use weather_client::{OpenWeatherClient, WeatherProvider};

use crate::catalog::Catalog;
use crate::cities::CityRegistry;
use crate::config::BotConfig;
use crate::handlers::{CityWeatherHandler, LoggingHandler, Pacing};

/// Logging handler first, then the city weather conversation, over the default cities and texts.
/// `bot_username` is shared with the dispatcher, which fills it from getMe.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    weather: Arc<dyn WeatherProvider>,
    pacing: Pacing,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let handler = CityWeatherHandler::new(
        bot,
        weather,
        Arc::new(CityRegistry::default()),
        Arc::new(Catalog::descriptions()),
        Arc::new(Catalog::advice()),
    )
    .with_pacing(pacing)
    .with_bot_username(bot_username);

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(handler))
}

/// OpenWeatherMap client configured from [`BotConfig`].
pub fn build_weather_client(config: &BotConfig) -> OpenWeatherClient {
    OpenWeatherClient::new(config.weather.api_key.clone())
        .with_base_url(config.weather.api_url.clone())
        .with_units(config.weather.units.clone())
        .with_lang(config.weather.lang.clone())
}

/// Main entry: validate config, init logging, build the chain, then poll Telegram until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let weather: Arc<dyn WeatherProvider> = Arc::new(build_weather_client(&config));

    info!(
        log_file = %config.log_file,
        weather_api_url = %config.weather.api_url,
        before_weather_secs = config.weather.pacing.before_weather.as_secs(),
        before_advice_secs = config.weather.pacing.before_advice.as_secs(),
        "Initializing bot"
    );

    let bot_username = Arc::new(RwLock::new(None));
    let chain = build_handler_chain(bot, weather, config.weather.pacing, bot_username.clone());

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, chain, bot_username).await
}

//! City weather conversation: `/start` shows the city menu; a city button sends description, weather and
//! advice as three paced messages, then acknowledges the button press.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dbot_core::{Bot, CallbackQuery, Event, Handler, HandlerResponse, Message, Result};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use weather_client::WeatherProvider;

use crate::catalog::Catalog;
use crate::cities::{parse_callback_data, CityRegistry};
use crate::replies::{
    advice_message, city_menu, description_message, weather_message, UNSUPPORTED_CITY_ALERT,
    WEATHER_UNAVAILABLE_ALERT, WELCOME_TEXT,
};

/// Pauses between the three messages of a city reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Between the description and the weather message.
    pub before_weather: Duration,
    /// Between the weather and the advice message.
    pub before_advice: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            before_weather: Duration::from_secs(2),
            before_advice: Duration::from_secs(3),
        }
    }
}

/// True for `/start` and `/start <payload>`, and for `/start@<own username>` (ASCII case-insensitive).
/// A mention of any other bot, or any mention while the own username is unknown, does not match.
pub fn is_start_command(text: &str, own_username: Option<&str>) -> bool {
    let Some(token) = text.split_whitespace().next() else {
        return false;
    };
    let (command, mention) = match token.split_once('@') {
        Some((command, mention)) => (command, Some(mention)),
        None => (token, None),
    };
    if command != "/start" {
        return false;
    }
    match mention {
        None => true,
        Some(mention) => own_username.is_some_and(|own| own.eq_ignore_ascii_case(mention)),
    }
}

pub struct CityWeatherHandler {
    bot: Arc<dyn Bot>,
    weather: Arc<dyn WeatherProvider>,
    cities: Arc<CityRegistry>,
    descriptions: Arc<Catalog>,
    advice: Arc<Catalog>,
    pacing: Pacing,
    /// Filled from getMe by the runner; None until then.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CityWeatherHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        weather: Arc<dyn WeatherProvider>,
        cities: Arc<CityRegistry>,
        descriptions: Arc<Catalog>,
        advice: Arc<Catalog>,
    ) -> Self {
        Self {
            bot,
            weather,
            cities,
            descriptions,
            advice,
            pacing: Pacing::default(),
            bot_username: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Shares the bot's own username, used to accept `/start@<username>`.
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn send_menu(&self, message: &Message) -> Result<()> {
        let menu = city_menu(&self.cities);
        self.bot
            .reply_with_keyboard(message, WELCOME_TEXT, &menu)
            .await?;
        info!(cities = self.cities.len(), "step: city menu sent");
        Ok(())
    }

    #[instrument(skip(self, query, city), fields(user_id = query.user.id, city = %city))]
    async fn process_city(&self, query: &CallbackQuery, city: &str) -> Result<()> {
        let Some(city_query) = self.cities.lookup(city) else {
            warn!("Unsupported city selected");
            return self
                .bot
                .answer_callback(query, Some(UNSUPPORTED_CITY_ALERT))
                .await;
        };

        let weather = match self.weather.fetch(city_query).await {
            Ok(weather) => weather,
            Err(e) => {
                warn!(error = %e, city_query = %city_query, "Weather unavailable");
                return self
                    .bot
                    .answer_callback(query, Some(WEATHER_UNAVAILABLE_ALERT))
                    .await;
            }
        };

        let chat = query.reply_chat();

        let description = description_message(city, self.descriptions.get(city));
        self.bot.send_message(&chat, &description).await?;
        info!(chat_id = chat.id, "step: description sent");

        tokio::time::sleep(self.pacing.before_weather).await;
        self.bot
            .send_message(&chat, &weather_message(city, &weather))
            .await?;
        info!(chat_id = chat.id, "step: weather sent");

        tokio::time::sleep(self.pacing.before_advice).await;
        self.bot
            .send_message(&chat, &advice_message(self.advice.get(city)))
            .await?;
        info!(chat_id = chat.id, "step: advice sent");

        self.bot.answer_callback(query, None).await
    }
}

#[async_trait]
impl Handler for CityWeatherHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        match event {
            Event::Message(message) => {
                let own_username = self.bot_username.read().await.clone();
                if !is_start_command(&message.content, own_username.as_deref()) {
                    return Ok(HandlerResponse::Ignore);
                }
                self.send_menu(message).await?;
                Ok(HandlerResponse::Stop)
            }
            Event::Callback(query) => match query.data.as_deref().and_then(parse_callback_data) {
                Some(city) => {
                    self.process_city(query, city).await?;
                    Ok(HandlerResponse::Stop)
                }
                None => Ok(HandlerResponse::Ignore),
            },
        }
    }
}

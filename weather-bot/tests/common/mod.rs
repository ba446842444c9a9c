//! Test doubles shared by the weather-bot integration tests.
//!
//! - `RecordingBot`: records every outbound call with the (tokio) time it happened; can be told to fail sends.
//! - `StubWeather`: returns a fixed snapshot or a status error and counts fetches.
//! - Event builders for `/start` messages and button presses.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{
    Bot, CallbackQuery, Chat, DbotError, Event, InlineKeyboard, Message, Result,
    User,
};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};
use weather_client::{WeatherError, WeatherProvider, WeatherSnapshot};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `with_test_writer()` keeps output in the test console.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,weather_bot=debug"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
    },
    Reply {
        chat_id: i64,
        reply_to: String,
        text: String,
    },
    Keyboard {
        chat_id: i64,
        reply_to: String,
        text: String,
        keyboard: InlineKeyboard,
    },
    Answer {
        callback_id: String,
        alert: Option<String>,
    },
}

impl Sent {
    pub fn is_message(&self) -> bool {
        matches!(self, Sent::Message { .. })
    }
}

#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<(Instant, Sent)>>,
    fail_sends: AtomicBool,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every later send_message fail with a bot error.
    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().iter().map(|(_, s)| s.clone()).collect()
    }

    pub fn timed(&self) -> Vec<(Instant, Sent)> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts of plain messages sent to `chat_id`, in order.
    pub fn messages_to(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Message { chat_id: id, text } if id == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push((Instant::now(), sent));
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.record(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Sent::Reply {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_with_keyboard(
        &self,
        message: &Message,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        self.record(Sent::Keyboard {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query: &CallbackQuery, alert: Option<&str>) -> Result<()> {
        self.record(Sent::Answer {
            callback_id: query.id.clone(),
            alert: alert.map(str::to_string),
        });
        Ok(())
    }
}

pub struct StubWeather {
    snapshot: Option<WeatherSnapshot>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubWeather {
    pub fn returning(snapshot: WeatherSnapshot) -> Arc<Self> {
        Arc::new(Self {
            snapshot: Some(snapshot),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Every fetch fails as if the provider answered 500.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            snapshot: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn fetch(&self, city_query: &str) -> std::result::Result<WeatherSnapshot, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(city_query.to_string());
        self.snapshot.clone().ok_or_else(|| WeatherError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream failure".to_string(),
        })
    }
}

/// temp=5, "облачно", humidity=80, wind=3.
pub fn cloudy_moscow() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 5.0,
        description: "облачно".to_string(),
        humidity: 80,
        wind_speed: 3.0,
    }
}

pub fn test_user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

pub fn private_chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

/// Own-username slot as the dispatcher would fill it from getMe.
pub fn bot_username(username: Option<&str>) -> Arc<RwLock<Option<String>>> {
    Arc::new(RwLock::new(username.map(str::to_string)))
}

pub fn text_event(user_id: i64, message_id: &str, content: &str) -> Event {
    Event::Message(Message {
        id: message_id.to_string(),
        user: test_user(user_id),
        chat: private_chat(user_id),
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    })
}

pub fn button_event(user_id: i64, callback_id: &str, data: &str) -> Event {
    Event::Callback(CallbackQuery {
        id: callback_id.to_string(),
        user: test_user(user_id),
        chat: Some(private_chat(user_id)),
        message_id: Some("1".to_string()),
        data: Some(data.to_string()),
        created_at: Utc::now(),
    })
}

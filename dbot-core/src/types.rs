//! Core types: user, chat, message, callback query, inbound event, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

/// Activation of an inline button. `chat` and `message_id` point at the message carrying the button;
/// both are absent when the transport no longer has access to that message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    pub chat: Option<Chat>,
    pub message_id: Option<String>,
    pub data: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CallbackQuery {
    /// Chat to answer in: the chat of the button's message, or the user's private chat.
    pub fn reply_chat(&self) -> Chat {
        self.chat.clone().unwrap_or_else(|| Chat {
            id: self.user.id,
            chat_type: "private".to_string(),
        })
    }
}

/// Inbound event consumed once by the handler chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Message(Message),
    Callback(CallbackQuery),
}

impl Event {
    pub fn user(&self) -> &User {
        match self {
            Event::Message(m) => &m.user,
            Event::Callback(q) => &q.user,
        }
    }

    /// Chat id the event belongs to, if known.
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Event::Message(m) => Some(m.chat.id),
            Event::Callback(q) => q.chat.as_ref().map(|c| c.id),
        }
    }

    /// Short label for logs: "message" or "callback".
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Callback(_) => "callback",
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific callback query to core [`CallbackQuery`].
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> CallbackQuery;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &Event) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &Event) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &Event,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

//! Bot abstraction for outbound traffic: plain messages, replies, inline menus and callback answers.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it over teloxide, tests substitute a recording impl.

use crate::error::{DbotError, Result};
use crate::types::{CallbackQuery, Chat, Message};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One selectable inline button: label shown to the user and the opaque token returned on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Inline keyboard attached to a message, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    /// Keyboard with one button per row.
    pub fn single_column(buttons: impl IntoIterator<Item = InlineButton>) -> Self {
        Self {
            rows: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }

    /// All buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat, quoting it).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Replies to the given message and attaches an inline keyboard.
    async fn reply_with_keyboard(
        &self,
        message: &Message,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()>;
    /// Answers a callback query, dismissing the client's spinner. `alert` is shown as a modal notice when set.
    async fn answer_callback(&self, query: &CallbackQuery, alert: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32. Used when quoting a message in a reply.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }

    #[test]
    fn test_single_column_keyboard() {
        let keyboard = InlineKeyboard::single_column(vec![
            InlineButton::new("A", "x_A"),
            InlineButton::new("B", "x_B"),
        ]);
        assert_eq!(keyboard.rows.len(), 2);
        assert!(keyboard.rows.iter().all(|row| row.len() == 1));
        let labels: Vec<&str> = keyboard.buttons().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }
}

//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{
    CallbackQuery, Chat, Message, ToCoreCallback, ToCoreMessage, ToCoreUser,
    User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: if chat.is_private() {
            "private".to_string()
        } else {
            "group".to_string()
        },
    }
}

/// Content and message type: the text, or the caption of a media message, or empty.
fn content_of<'m>(text: Option<&'m str>, caption: Option<&'m str>) -> (&'m str, &'static str) {
    match (text, caption) {
        (Some(text), _) => (text, "text"),
        (None, Some(caption)) => (caption, "caption"),
        (None, None) => ("", "other"),
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, message_type) = content_of(self.0.text(), self.0.caption());
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: to_core_chat(&self.0.chat),
            content: content.to_string(),
            message_type: message_type.to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`CallbackQuery`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallback for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        let origin = self.0.message.as_ref();
        CallbackQuery {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            chat: origin.map(|m| to_core_chat(m.chat())),
            message_id: origin.map(|m| m.id().to_string()),
            data: self.0.data.clone(),
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: A media message's caption is used as content when there is no text, so a captioned `/start` is a command.**
    #[test]
    fn test_content_falls_back_to_caption() {
        assert_eq!(content_of(Some("/start"), None), ("/start", "text"));
        assert_eq!(content_of(None, Some("/start")), ("/start", "caption"));
        assert_eq!(content_of(Some("hi"), Some("ignored")), ("hi", "text"));
        assert_eq!(content_of(None, None), ("", "other"));
    }
}

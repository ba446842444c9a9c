//! Logs each inbound event in before() and the chain's response in after(); always continues.

use async_trait::async_trait;
use dbot_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user = event.user();
        let username = user.username.as_deref().unwrap_or("unknown");
        match event {
            Event::Message(m) => info!(
                user_id = user.id,
                username = %username,
                chat_id = m.chat.id,
                message_content = %m.content,
                "Received message"
            ),
            Event::Callback(q) => info!(
                user_id = user.id,
                username = %username,
                chat_id = ?event.chat_id(),
                callback_data = %q.data.as_deref().unwrap_or(""),
                "Received callback query"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            user_id = event.user().id,
            kind = event.kind(),
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}

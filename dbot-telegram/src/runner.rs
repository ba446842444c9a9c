//! Dispatcher runner: converts teloxide messages and callback queries to core events and hands them to the HandlerChain.
//! Each event is processed in its own task so paced replies in one chat never hold up another.

use anyhow::Result;
use dbot_core::{Event, ToCoreCallback, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Starts long polling with the given teloxide Bot and HandlerChain until Ctrl-C.
/// Calls getMe first and writes the username into `bot_username` for handlers matching `/cmd@username`;
/// a failing getMe is logged and leaves it None.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => error!(error = %e, "getMe failed"),
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    debug!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        "Dispatching message"
    );
    spawn_chain(chain, Event::Message(core_msg));
    Ok(())
}

async fn on_callback_query(
    query: teloxide::types::CallbackQuery,
    chain: HandlerChain,
) -> ResponseResult<()> {
    let core_query = TelegramCallbackWrapper(&query).to_core();
    debug!(
        user_id = core_query.user.id,
        callback_id = %core_query.id,
        "Dispatching callback query"
    );
    spawn_chain(chain, Event::Callback(core_query));
    Ok(())
}

fn spawn_chain(chain: HandlerChain, event: Event) {
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&event).await {
            error!(
                error = %e,
                user_id = event.user().id,
                kind = event.kind(),
                "Handler chain failed"
            );
        }
    });
}

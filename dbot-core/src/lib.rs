//! # dbot-core
//!
//! Core types and traits for the Telegram bot: [`Bot`], [`Handler`], [`Event`], message, callback and user types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and the application crates.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, InlineButton, InlineKeyboard};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackQuery, Chat, Event, Handler, HandlerResponse, Message, ToCoreCallback, ToCoreMessage,
    ToCoreUser, User,
};

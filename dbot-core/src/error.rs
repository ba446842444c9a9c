use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Transport rejected or failed an outbound call.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;

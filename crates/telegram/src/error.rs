use crate::constants::emoji;
use crate::navigation::MalformedToken;
use library::LibraryError;

/// Custom error type for telegram bot operations
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// Telegram API error
    #[error("Telegram error: {0}")]
    TelegramError(#[from] teloxide::RequestError),
    /// Song library error
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),
    /// Callback data that doesn't decode
    #[error(transparent)]
    MalformedToken(#[from] MalformedToken),
    /// Invalid user input, e.g. a caption without a separator
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Helper trait to convert results into user-friendly messages
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        match self {
            BotError::TelegramError(e) => format!("{} Communication error: {}", emoji::ERROR, e),
            BotError::Library(LibraryError::Validation(msg)) => {
                format!("{} {}", emoji::ERROR, msg)
            }
            BotError::Library(_) => {
                format!("{} The song library is unavailable, try again later.", emoji::ERROR)
            }
            BotError::MalformedToken(_) => {
                format!("{} This button is outdated. Send /start to begin again.", emoji::WARNING)
            }
            BotError::InvalidArguments(msg) => format!("{} {}", emoji::ERROR, msg),
        }
    }
}

impl BotError {
    /// Whether the sender caused the error (and should just be told about it)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BotError::InvalidArguments(_)
                | BotError::MalformedToken(_)
                | BotError::Library(LibraryError::Validation(_))
        )
    }
}

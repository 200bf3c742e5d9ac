/// Errors raised by the song library
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Caller input rejected before touching the database
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Pages are 1-indexed
    #[error("Invalid page number: {0} (pages start at 1)")]
    InvalidPage(u32),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running a query panicked or was cancelled
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

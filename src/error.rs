//! Error types for Board API.

use thiserror::Error;

/// Common error type for Board API.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Wraps errors from any database backend. Errors from sqlx are
    /// converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Field-level validation failure for a board entry.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for Board API operations.
pub type Result<T> = std::result::Result<T, BoardError>;

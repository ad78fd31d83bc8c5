//! Board entry types for Board API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use super::validation::not_blank;

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: u64 = 100;

/// Maximum author name length in characters.
pub const MAX_AUTHOR_LENGTH: u64 = 50;

/// A single post on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct BoardEntry {
    /// Unique entry ID, assigned by the store.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Name of the author.
    pub author: String,
    /// Creation timestamp, set once at insertion.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp. Entries are never modified, so this is
    /// always `None` for entries created through the store.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for creating a new board entry.
///
/// These are the only client-writable fields.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBoardEntry {
    /// Post title.
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_TITLE_LENGTH)
    )]
    pub title: String,
    /// Post body.
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    /// Name of the author.
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_AUTHOR_LENGTH)
    )]
    pub author: String,
}

impl NewBoardEntry {
    /// Create a new entry with the required fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

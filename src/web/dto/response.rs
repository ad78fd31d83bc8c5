//! Response DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::board::BoardEntry;

/// Board entry response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardResponse {
    /// Entry ID.
    #[schema(example = 1)]
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author name.
    pub author: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp; always null since entries are never modified.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<BoardEntry> for BoardResponse {
    fn from(entry: BoardEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            content: entry.content,
            author: entry.author,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Service banner returned from `/`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Banner text.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

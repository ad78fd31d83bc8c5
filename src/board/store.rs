//! Storage interface for board entries.

use async_trait::async_trait;

use super::types::{BoardEntry, NewBoardEntry};
use crate::Result;

/// Persistence abstraction for board entries.
///
/// Implementations assign `id` and `created_at` themselves and validate the
/// entry before persisting anything, so a failed `create` never leaves a
/// partial row behind.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Validate and insert a new entry, returning it with generated fields.
    async fn create(&self, new_entry: NewBoardEntry) -> Result<BoardEntry>;

    /// List every entry, newest first (ties broken by higher id first).
    async fn list_all(&self) -> Result<Vec<BoardEntry>>;
}

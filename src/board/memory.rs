//! In-memory board store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use validator::Validate;

use super::store::BoardStore;
use super::types::{BoardEntry, NewBoardEntry};
use crate::Result;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    entries: Vec<BoardEntry>,
}

/// Board store kept entirely in process memory.
///
/// Nothing survives a restart. Useful for tests and for running the API
/// without a database.
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    inner: RwLock<Inner>,
}

impl MemoryBoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn create(&self, new_entry: NewBoardEntry) -> Result<BoardEntry> {
        new_entry.validate()?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let entry = BoardEntry {
            id: inner.next_id,
            title: new_entry.title,
            content: new_entry.content,
            author: new_entry.author,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.entries.push(entry.clone());

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<BoardEntry>> {
        let mut entries = self.inner.read().await.entries.clone();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }
}

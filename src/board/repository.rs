//! Board repository for Board API.
//!
//! sqlx-backed [`BoardStore`] over the shared database pool.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use validator::Validate;

use super::store::BoardStore;
use super::types::{BoardEntry, NewBoardEntry};
use crate::db::{Database, DbPool};
use crate::Result;

/// Repository for board entry persistence.
#[derive(Clone)]
pub struct BoardRepository {
    pool: DbPool,
}

impl BoardRepository {
    /// Create a new BoardRepository sharing the given database's pool.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Count all stored entries.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl BoardStore for BoardRepository {
    async fn create(&self, new_entry: NewBoardEntry) -> Result<BoardEntry> {
        new_entry.validate()?;

        let entry: BoardEntry = sqlx::query_as(
            "INSERT INTO boards (title, content, author, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, author, created_at, updated_at",
        )
        .bind(&new_entry.title)
        .bind(&new_entry.content)
        .bind(&new_entry.author)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        debug!(id = entry.id, author = %entry.author, "Inserted board entry");
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<BoardEntry>> {
        let entries: Vec<BoardEntry> = sqlx::query_as(
            "SELECT id, title, content, author, created_at, updated_at
             FROM boards ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}

//! Database module for Board API.
//!
//! This module provides sqlx pool management and migration handling.
//! SQLite is the default backend; PostgreSQL is available behind the
//! `postgres` feature.

mod schema;

pub use schema::MIGRATIONS;

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::{BoardError, Result};

/// Connection pool type for the active backend.
#[cfg(feature = "sqlite")]
pub type DbPool = sqlx::SqlitePool;

/// Connection pool type for the active backend.
#[cfg(all(feature = "postgres", not(feature = "sqlite")))]
pub type DbPool = sqlx::PgPool;

/// Database wrapper owning the connection pool.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Connect to the database described by `config` and apply migrations.
    ///
    /// For SQLite, the database file and its parent directories are created
    /// if missing.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to {} database", Self::backend_name_static());

        let pool = Self::build_pool(config).await?;
        info!("Database connection established successfully");

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Open an in-memory database for testing.
    ///
    /// The pool holds exactly one connection that never expires, since each
    /// SQLite in-memory connection is its own database.
    #[cfg(feature = "sqlite")]
    pub async fn open_in_memory() -> Result<Self> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        debug!("Opening in-memory database");
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| BoardError::DatabaseConnection(e.to_string()))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    fn pool_options<DB: sqlx::Database>(config: &DatabaseConfig) -> sqlx::pool::PoolOptions<DB> {
        sqlx::pool::PoolOptions::<DB>::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_secs)))
    }

    #[cfg(feature = "sqlite")]
    async fn build_pool(config: &DatabaseConfig) -> Result<DbPool> {
        use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| BoardError::DatabaseConnection(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::pool_options::<sqlx::Sqlite>(config)
            .connect_with(options)
            .await
            .map_err(|e| BoardError::DatabaseConnection(e.to_string()))
    }

    #[cfg(all(feature = "postgres", not(feature = "sqlite")))]
    async fn build_pool(config: &DatabaseConfig) -> Result<DbPool> {
        Self::pool_options::<sqlx::Postgres>(config)
            .connect(&config.url)
            .await
            .map_err(|e| BoardError::DatabaseConnection(e.to_string()))
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn backend_name_static() -> &'static str {
        if cfg!(feature = "sqlite") {
            "sqlite"
        } else {
            "postgres"
        }
    }

    /// Returns the name of the database backend.
    pub fn backend_name(&self) -> &'static str {
        Self::backend_name_static()
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        if !self.table_exists("schema_version").await? {
            return Ok(0);
        }

        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;

        Ok(version)
    }

    /// Apply pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        let current_version = self.schema_version().await?;
        let target_version = MIGRATIONS.len() as i64;

        if current_version >= target_version {
            debug!("Database is up to date (version {})", current_version);
            return Ok(());
        }

        info!(
            "Migrating database from version {} to {}",
            current_version, target_version
        );

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version     BIGINT PRIMARY KEY,
                applied_at  TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        for (i, migration) in MIGRATIONS
            .iter()
            .enumerate()
            .skip(current_version as usize)
        {
            let version = (i + 1) as i64;
            info!("Applying migration v{}", version);

            let mut tx = self.pool.begin().await?;

            sqlx::raw_sql(migration).execute(&mut *tx).await?;

            sqlx::query("INSERT INTO schema_version (version, applied_at) VALUES ($1, $2)")
                .bind(version)
                .bind(Utc::now().to_rfc3339())
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            debug!("Migration v{} applied successfully", version);
        }

        info!(
            "Database migration complete (now at version {})",
            target_version
        );
        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        #[cfg(feature = "sqlite")]
        let sql = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = $1";
        #[cfg(all(feature = "postgres", not(feature = "sqlite")))]
        let sql = "SELECT COUNT(*) FROM information_schema.tables
                   WHERE table_schema = current_schema() AND table_name = $1";

        let count: i64 = sqlx::query_scalar(sql)
            .bind(table_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.backend_name())
            .finish()
    }
}

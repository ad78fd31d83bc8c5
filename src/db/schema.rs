//! Database schema and migrations for Board API.
//!
//! Migrations are applied sequentially when the database is first opened
//! or upgraded. SQLite and PostgreSQL differ only in column types.

/// Database migrations (SQLite).
///
/// Each migration is a SQL script executed in order. The schema_version
/// table tracks which migrations have been applied.
#[cfg(feature = "sqlite")]
pub const MIGRATIONS: &[&str] = &[
    // v1: Boards table
    r#"
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       VARCHAR(100) NOT NULL,
    content     TEXT NOT NULL,
    author      VARCHAR(50) NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT
);

CREATE INDEX idx_boards_created_at ON boards(created_at);
"#,
];

/// Database migrations (PostgreSQL).
#[cfg(all(feature = "postgres", not(feature = "sqlite")))]
pub const MIGRATIONS: &[&str] = &[
    // v1: Boards table
    r#"
CREATE TABLE boards (
    id          BIGSERIAL PRIMARY KEY,
    title       VARCHAR(100) NOT NULL,
    content     TEXT NOT NULL,
    author      VARCHAR(50) NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at  TIMESTAMPTZ
);

CREATE INDEX idx_boards_created_at ON boards(created_at);
"#,
];

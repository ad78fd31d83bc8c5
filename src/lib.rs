//! Board API
//!
//! A minimal bulletin board post service: list every post newest first and
//! create new posts, served over HTTP and backed by a relational store.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardEntry, BoardRepository, BoardStore, MemoryBoardStore, NewBoardEntry};
pub use config::Config;
pub use db::Database;
pub use error::{BoardError, Result};
pub use web::WebServer;

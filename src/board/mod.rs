//! Board module for Board API.
//!
//! This module provides the board entry store:
//! - Entry types and their field rules
//! - The `BoardStore` storage interface
//! - A sqlx-backed repository and an in-memory store

mod memory;
mod repository;
mod store;
mod types;
pub mod validation;

pub use memory::MemoryBoardStore;
pub use repository::BoardRepository;
pub use store::BoardStore;
pub use types::{BoardEntry, NewBoardEntry, MAX_AUTHOR_LENGTH, MAX_TITLE_LENGTH};

//! API handlers for Board API.

pub mod board;

pub use board::*;

use std::sync::Arc;

use crate::board::BoardStore;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Board entry store.
    pub store: Arc<dyn BoardStore>,
}

impl AppState {
    /// Create application state over the given store.
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

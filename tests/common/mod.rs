//! Test helpers for integration tests.
//!
//! Provides test server construction over real and failing stores.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use board_api::config::WebConfig;
use board_api::web::create_app;
use board_api::web::handlers::AppState;
use board_api::{BoardEntry, BoardError, BoardRepository, BoardStore, Database, NewBoardEntry};

/// Create a test web configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        cors_origins: vec![],
        swagger_enabled: false,
    }
}

/// Create a test server over the given store.
pub fn create_test_server_with_store(store: Arc<dyn BoardStore>) -> TestServer {
    let app_state = Arc::new(AppState::new(store));
    let router = create_app(app_state, &create_test_config());
    TestServer::new(router).expect("Failed to create test server")
}

/// Create a test server backed by an in-memory SQLite database.
///
/// The database handle is returned so it outlives the server.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let store = Arc::new(BoardRepository::new(&db));
    (create_test_server_with_store(store), db)
}

/// Store whose every operation fails with a database error.
pub struct FailingStore;

#[async_trait]
impl BoardStore for FailingStore {
    async fn create(&self, _new_entry: NewBoardEntry) -> board_api::Result<BoardEntry> {
        Err(BoardError::Database("connection refused".to_string()))
    }

    async fn list_all(&self) -> board_api::Result<Vec<BoardEntry>> {
        Err(BoardError::Database("connection refused".to_string()))
    }
}

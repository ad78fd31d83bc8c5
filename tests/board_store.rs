//! Board store tests.
//!
//! The same behavior is checked against every [`BoardStore`] implementation.

#![cfg(feature = "sqlite")]

use std::sync::Arc;

use board_api::{
    BoardError, BoardRepository, BoardStore, Database, MemoryBoardStore, NewBoardEntry,
};

async fn stores() -> Vec<(&'static str, Arc<dyn BoardStore>, Option<Database>)> {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    vec![
        ("sqlite", Arc::new(BoardRepository::new(&db)), Some(db)),
        ("memory", Arc::new(MemoryBoardStore::new()), None),
    ]
}

#[tokio::test]
async fn test_new_store_is_empty() {
    for (name, store, _db) in stores().await {
        assert!(store.list_all().await.unwrap().is_empty(), "{name}");
    }
}

#[tokio::test]
async fn test_create_returns_stored_entry() {
    for (name, store, _db) in stores().await {
        let entry = store
            .create(NewBoardEntry::new("Hello", "World", "Alice"))
            .await
            .unwrap();

        assert!(entry.id > 0, "{name}");
        assert_eq!(entry.title, "Hello", "{name}");
        assert_eq!(entry.content, "World", "{name}");
        assert_eq!(entry.author, "Alice", "{name}");
        assert!(entry.updated_at.is_none(), "{name}");

        let all = store.list_all().await.unwrap();
        assert_eq!(all, vec![entry], "{name}");
    }
}

#[tokio::test]
async fn test_list_all_newest_first() {
    for (name, store, _db) in stores().await {
        let mut created = Vec::new();
        for i in 0..4 {
            created.push(
                store
                    .create(NewBoardEntry::new(format!("post {i}"), "body", "Bob"))
                    .await
                    .unwrap(),
            );
        }

        let all = store.list_all().await.unwrap();
        created.reverse();
        assert_eq!(all, created, "{name}");

        for pair in all.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at, "{name}");
        }
    }
}

#[tokio::test]
async fn test_ids_are_unique() {
    for (name, store, _db) in stores().await {
        let a = store
            .create(NewBoardEntry::new("t", "c", "a"))
            .await
            .unwrap();
        let b = store
            .create(NewBoardEntry::new("t", "c", "a"))
            .await
            .unwrap();
        assert_ne!(a.id, b.id, "{name}");
    }
}

#[tokio::test]
async fn test_invalid_entry_is_rejected() {
    for (name, store, _db) in stores().await {
        let result = store
            .create(NewBoardEntry::new("x".repeat(101), "body", "Alice"))
            .await;
        assert!(matches!(result, Err(BoardError::Validation(_))), "{name}");

        let result = store.create(NewBoardEntry::new("title", " ", "Alice")).await;
        assert!(matches!(result, Err(BoardError::Validation(_))), "{name}");

        assert!(store.list_all().await.unwrap().is_empty(), "{name}");
    }
}

#[tokio::test]
async fn test_concurrent_creates() {
    for (name, store, _db) in stores().await {
        let mut handles = Vec::new();
        for i in 0..10 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .create(NewBoardEntry::new(format!("t{i}"), "c", "a"))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 10, "{name}");
        assert_eq!(store.list_all().await.unwrap().len(), 10, "{name}");
    }
}

#[tokio::test]
async fn test_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = board_api::config::DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("board.db").display()),
        ..Default::default()
    };

    let db = Database::connect(&config).await.unwrap();
    let entry = BoardRepository::new(&db)
        .create(NewBoardEntry::new("Hello", "World", "Alice"))
        .await
        .unwrap();
    db.close().await;

    let db = Database::connect(&config).await.unwrap();
    let all = BoardRepository::new(&db).list_all().await.unwrap();
    assert_eq!(all, vec![entry]);
    db.close().await;
}

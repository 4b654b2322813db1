//! End-to-end runs against the SQLite store.

use std::sync::Arc;

use tempfile::TempDir;

use lyricline_core::{
    testing::{fixtures, MockSearcher},
    CollectionKind, CollectionOrchestrator, CollectionStore, CollectorConfig, PostSearcher,
    RawPost, SqliteStore, WordStore,
};

fn fast_config() -> CollectorConfig {
    CollectorConfig {
        rate_window_secs: 1,
        rate_max_requests: 1000,
        persistence_retry_delay_ms: 1,
        ..Default::default()
    }
}

async fn run_once(store: &Arc<SqliteStore>, first_id: u64) -> lyricline_core::RunSummary {
    let searcher = Arc::new(MockSearcher::new());
    searcher
        .push_results(vec![
            fixtures::post(first_id + 2, fixtures::minutes_from_now(3), "to"),
            fixtures::post(first_id + 1, fixtures::minutes_from_now(2), "control"),
            fixtures::post(first_id, fixtures::minutes_from_now(1), "Ground"),
        ])
        .await;

    CollectionOrchestrator::new(
        fast_config(),
        Arc::clone(store) as Arc<dyn WordStore>,
        Arc::clone(store) as Arc<dyn CollectionStore>,
        searcher as Arc<dyn PostSearcher>,
    )
    .run()
    .await
    .expect("run should succeed")
}

fn ids(store: &SqliteStore, kind: CollectionKind) -> Vec<u64> {
    store
        .members(kind)
        .unwrap()
        .iter()
        .map(|p| RawPost::from_payload(p).unwrap().post_id().unwrap())
        .collect()
}

#[tokio::test]
async fn test_runs_rotate_collections_on_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("lyricline.db");
    let store = Arc::new(SqliteStore::new(&db_path).expect("Failed to open store"));
    store
        .set_words(&["Ground".to_string(), "control".to_string(), "to".to_string()])
        .unwrap();

    let first = run_once(&store, 10).await;
    assert_eq!(first.words_collected, 3);
    assert_eq!(ids(&store, CollectionKind::Recent), vec![10, 11, 12]);
    assert!(ids(&store, CollectionKind::Prev).is_empty());

    let second = run_once(&store, 20).await;
    assert_ne!(first.run_id, second.run_id);
    assert_eq!(ids(&store, CollectionKind::Recent), vec![20, 21, 22]);
    assert_eq!(ids(&store, CollectionKind::Prev), vec![10, 11, 12]);
    assert!(ids(&store, CollectionKind::Upcoming).is_empty());

    // Reopen from disk.
    drop(store);
    let reopened = SqliteStore::new(&db_path).unwrap();
    assert_eq!(reopened.get_words().unwrap(), vec!["Ground", "control", "to"]);
    assert_eq!(ids(&reopened, CollectionKind::Prev), vec![10, 11, 12]);
}

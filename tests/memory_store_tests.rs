use std::sync::Arc;
use time_log_service::store::{MemoryTimeLogStore, TimeLogStore};

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let store = MemoryTimeLogStore::new();

    assert!(store.list_all().await.unwrap().is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_ids_start_at_one_and_increase() {
    let store = MemoryTimeLogStore::new();

    let first = store.insert("2024-01-15 14:30:00".to_string()).await.unwrap();
    let second = store.insert("2024-01-15 14:30:05".to_string()).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows, vec![first, second]);
}

#[tokio::test]
async fn test_concurrent_inserts_keep_unique_ascending_ids() {
    let store = Arc::new(MemoryTimeLogStore::new());

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.insert(format!("2024-01-15 14:30:{i:02}")).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let rows = store.list_all().await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    assert_eq!(store.len().await, 20);
    assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
}

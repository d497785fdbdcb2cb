//! Tests for the in-memory episode store.

use episodic_core::NewEpisode;
use episodic_error::EpisodeExistsError;
use episodic_interface::EpisodeStore;
use episodic_storage::InMemoryEpisodeStore;

fn sample(title: &str) -> NewEpisode {
    NewEpisode::new(title, "We discuss upcoming trends.", "Joe Rogan")
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let store = InMemoryEpisodeStore::new();
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let store = InMemoryEpisodeStore::new();

    let first = store.insert(sample("First")).await.unwrap();
    let second = store.insert(sample("Second")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.len().await, 2);

    let titles: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_find_by_title_and_id() {
    let store = InMemoryEpisodeStore::new();
    let stored = store.insert(sample("Pilot")).await.unwrap();

    assert_eq!(store.find_by_title("Pilot").await.unwrap(), Some(stored.clone()));
    assert_eq!(store.find_by_id(stored.id).await.unwrap(), Some(stored));
    assert_eq!(store.find_by_title("Missing").await.unwrap(), None);
    assert_eq!(store.find_by_id(42).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_title_is_rejected() {
    let store = InMemoryEpisodeStore::new();
    store.insert(sample("Pilot")).await.unwrap();

    let err = store.insert(sample("Pilot")).await.unwrap_err();
    let exists = err.downcast_ref::<EpisodeExistsError>().unwrap();
    assert_eq!(exists.title, "Pilot");
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_inserts_store_once() {
    let store = InMemoryEpisodeStore::new();

    let attempts = (0..16).map(|_| {
        let store = store.clone();
        tokio::spawn(async move { store.insert(sample("Race")).await })
    });
    let results = futures::future::join_all(attempts).await;

    let succeeded = results
        .into_iter()
        .map(|joined| joined.unwrap())
        .filter(|result| result.is_ok())
        .count();
    assert_eq!(succeeded, 1);
    assert_eq!(store.len().await, 1);
}

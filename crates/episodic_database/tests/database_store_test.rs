//! Tests for the SQLite episode store.

use episodic_core::NewEpisode;
use episodic_database::DatabaseEpisodeStore;
use episodic_error::EpisodeExistsError;
use episodic_interface::EpisodeStore;

fn sample(title: &str) -> NewEpisode {
    NewEpisode::new(
        title,
        "We discuss upcoming trends in artificial intelligence.",
        "Joe Rogan",
    )
}

#[tokio::test]
async fn test_empty_database_lists_nothing() {
    let store = DatabaseEpisodeStore::in_memory().unwrap();
    assert!(store.list().await.unwrap().is_empty());
    assert_eq!(store.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_insert_returns_generated_id() {
    let store = DatabaseEpisodeStore::in_memory().unwrap();

    let stored = store.insert(sample("The Future of AI")).await.unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.title, "The Future of AI");
    assert_eq!(stored.host, "Joe Rogan");

    let next = store.insert(sample("The Past of AI")).await.unwrap();
    assert_eq!(next.id, 2);

    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![stored, next]);
}

#[tokio::test]
async fn test_find_by_title_and_id() {
    let store = DatabaseEpisodeStore::in_memory().unwrap();
    let stored = store.insert(sample("Pilot")).await.unwrap();

    assert_eq!(store.find_by_title("Pilot").await.unwrap(), Some(stored.clone()));
    assert_eq!(store.find_by_id(stored.id).await.unwrap(), Some(stored));
    assert!(store.find_by_title("Missing").await.unwrap().is_none());
    assert!(store.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unique_constraint_maps_to_conflict() {
    let store = DatabaseEpisodeStore::in_memory().unwrap();
    store.insert(sample("Pilot")).await.unwrap();

    let err = store.insert(sample("Pilot")).await.unwrap_err();
    let exists = err
        .downcast_ref::<EpisodeExistsError>()
        .expect("duplicate title should be reported as EpisodeExistsError");
    assert_eq!(exists.title, "Pilot");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_inserts_store_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.sqlite");
    let store = DatabaseEpisodeStore::open(path.to_str().unwrap(), 4).unwrap();

    let attempts = (0..8).map(|_| {
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
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("episodes.sqlite");
    let url = format!("sqlite:///{}", path.display());

    {
        let store = DatabaseEpisodeStore::open(&url, 2).unwrap();
        store.insert(sample("Persisted")).await.unwrap();
    }

    let reopened = DatabaseEpisodeStore::open(&url, 2).unwrap();
    let listed = reopened.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Persisted");
}

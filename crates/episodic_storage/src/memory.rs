//! Vector-backed implementation of EpisodeStore.

use async_trait::async_trait;
use episodic_core::{Episode, NewEpisode};
use episodic_error::{EpisodeExistsError, EpisodicResult};
use episodic_interface::EpisodeStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// In-memory repository for episodes.
///
/// Episodes are kept in insertion order behind an RwLock. The duplicate-title
/// check and the append happen under the same write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEpisodeStore {
    episodes: Arc<RwLock<Vec<Episode>>>,
}

impl InMemoryEpisodeStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored episodes.
    pub async fn len(&self) -> usize {
        self.episodes.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.episodes.read().await.is_empty()
    }
}

#[async_trait]
impl EpisodeStore for InMemoryEpisodeStore {
    #[instrument(skip(self))]
    async fn list(&self) -> EpisodicResult<Vec<Episode>> {
        Ok(self.episodes.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_title(&self, title: &str) -> EpisodicResult<Option<Episode>> {
        let episodes = self.episodes.read().await;
        Ok(episodes.iter().find(|e| e.title == title).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> EpisodicResult<Option<Episode>> {
        let episodes = self.episodes.read().await;
        Ok(episodes.iter().find(|e| e.id == id).cloned())
    }

    #[instrument(skip(self, episode), fields(title = %episode.title))]
    async fn insert(&self, episode: NewEpisode) -> EpisodicResult<Episode> {
        let mut episodes = self.episodes.write().await;

        if episodes.iter().any(|e| e.title == episode.title) {
            debug!("Title already stored");
            return Err(EpisodeExistsError::new(episode.title).into());
        }

        let id = episodes.last().map_or(1, |e| e.id + 1);
        let stored = episode.with_id(id);
        episodes.push(stored.clone());

        debug!(id, "Episode stored");
        Ok(stored)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

//! Capability traits for episode storage and text generation.

use async_trait::async_trait;
use episodic_core::{Episode, NewEpisode};
use episodic_error::EpisodicResult;

/// Storage for episode records.
///
/// Records are only ever created and read. Implementations assign the
/// surrogate id on insert and must reject a title that is already stored
/// with `EpisodeExistsError`, even when two inserts race.
#[async_trait]
pub trait EpisodeStore: Send + Sync {
    /// All stored episodes in storage order.
    async fn list(&self) -> EpisodicResult<Vec<Episode>>;

    /// The episode stored under `title`, if any.
    async fn find_by_title(&self, title: &str) -> EpisodicResult<Option<Episode>>;

    /// The episode stored under `id`, if any.
    async fn find_by_id(&self, id: i32) -> EpisodicResult<Option<Episode>>;

    /// Store a new episode and return it with its assigned id.
    async fn insert(&self, episode: NewEpisode) -> EpisodicResult<Episode>;

    /// Backend name (e.g., "memory", "sqlite").
    fn backend_name(&self) -> &'static str;
}

/// A text-generation backend.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Generate text from system instructions and user content.
    async fn prompt(&self, system: &str, user: &str) -> EpisodicResult<String>;
}

//! Episode record types.

use serde::{Deserialize, Serialize};

/// Payload for creating an episode.
///
/// # Examples
///
/// ```
/// use episodic_core::NewEpisode;
///
/// let episode = NewEpisode::new("The Future of AI", "Trends in AI.", "Joe Rogan");
/// assert_eq!(episode.title, "The Future of AI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewEpisode {
    /// Episode title, unique across the store
    pub title: String,
    /// Episode description
    pub description: String,
    /// Host of the episode
    pub host: String,
}

impl NewEpisode {
    /// Create a new episode payload.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            host: host.into(),
        }
    }

    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: i32) -> Episode {
        Episode {
            id,
            title: self.title,
            description: self.description,
            host: self.host,
        }
    }
}

/// A stored podcast episode.
///
/// # Examples
///
/// ```
/// use episodic_core::NewEpisode;
///
/// let stored = NewEpisode::new("Pilot", "First one.", "Ann").with_id(1);
/// assert_eq!(stored.id, 1);
/// assert_eq!(stored.host, "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Episode {
    /// Surrogate id assigned by the store
    pub id: i32,
    /// Episode title
    pub title: String,
    /// Episode description
    pub description: String,
    /// Host of the episode
    pub host: String,
}

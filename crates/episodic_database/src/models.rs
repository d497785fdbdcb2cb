//! Diesel models for the episodes table.

use diesel::prelude::*;
use episodic_core::{Episode, NewEpisode};

/// Database row for the episodes table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::episodes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EpisodeRow {
    /// Surrogate key
    pub id: i32,
    /// Unique title
    pub title: String,
    /// Episode description
    pub description: String,
    /// Host of the episode
    pub host: String,
}

/// Insertable struct for a new episode.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::episodes)]
pub struct NewEpisodeRow {
    /// Unique title
    pub title: String,
    /// Episode description
    pub description: String,
    /// Host of the episode
    pub host: String,
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Episode {
            id: row.id,
            title: row.title,
            description: row.description,
            host: row.host,
        }
    }
}

impl From<NewEpisode> for NewEpisodeRow {
    fn from(episode: NewEpisode) -> Self {
        NewEpisodeRow {
            title: episode.title,
            description: episode.description,
            host: episode.host,
        }
    }
}

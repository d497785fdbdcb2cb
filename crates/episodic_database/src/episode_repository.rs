//! SQLite implementation of EpisodeStore.

use crate::connection::{SqlitePool, create_memory_pool, create_pool, run_migrations};
use crate::schema::episodes;
use crate::{DatabaseResult, EpisodeRow, NewEpisodeRow};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind as DieselErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use episodic_core::{Episode, NewEpisode};
use episodic_error::{DatabaseError, DatabaseErrorKind, EpisodeExistsError, EpisodicResult};
use episodic_interface::EpisodeStore;
use tracing::{debug, instrument};

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Diesel-backed episode store using an r2d2 connection pool.
///
/// Each operation checks out one pooled connection and runs on the blocking
/// thread pool. Title uniqueness is enforced by the table's `UNIQUE`
/// constraint, so racing inserts of the same title cannot both succeed.
#[derive(Debug, Clone)]
pub struct DatabaseEpisodeStore {
    pool: SqlitePool,
}

impl DatabaseEpisodeStore {
    /// Open the database at `database_url`, creating the schema if needed.
    ///
    /// # Arguments
    /// * `database_url` - SQLite path or `sqlite://` URL
    /// * `pool_size` - Maximum number of pooled connections
    ///
    /// # Errors
    /// Returns an error if the pool cannot connect or migrations fail.
    pub fn open(database_url: &str, pool_size: u32) -> DatabaseResult<Self> {
        Self::from_pool(create_pool(database_url, pool_size)?)
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> DatabaseResult<Self> {
        Self::from_pool(create_memory_pool()?)
    }

    /// Wrap an existing pool, applying pending migrations first.
    pub fn from_pool(pool: SqlitePool) -> DatabaseResult<Self> {
        {
            let mut conn = pool.get()?;
            run_migrations(&mut conn)?;
        }
        Ok(Self { pool })
    }

    /// Run `f` with a pooled connection on the blocking thread pool.
    async fn with_connection<T, F>(&self, f: F) -> EpisodicResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> EpisodicResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(DatabaseError::from)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
    }
}

#[async_trait]
impl EpisodeStore for DatabaseEpisodeStore {
    #[instrument(skip(self))]
    async fn list(&self) -> EpisodicResult<Vec<Episode>> {
        self.with_connection(|conn| {
            let rows: Vec<EpisodeRow> = episodes::table
                .order(episodes::id.asc())
                .select(EpisodeRow::as_select())
                .load(conn)
                .map_err(DatabaseError::from)?;

            debug!(count = rows.len(), "Loaded episodes");
            Ok(rows.into_iter().map(Episode::from).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_title(&self, title: &str) -> EpisodicResult<Option<Episode>> {
        let title = title.to_string();
        self.with_connection(move |conn| {
            let row = episodes::table
                .filter(episodes::title.eq(title))
                .select(EpisodeRow::as_select())
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            Ok(row.map(Episode::from))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> EpisodicResult<Option<Episode>> {
        self.with_connection(move |conn| {
            let row = episodes::table
                .find(id)
                .select(EpisodeRow::as_select())
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            Ok(row.map(Episode::from))
        })
        .await
    }

    #[instrument(skip(self, episode), fields(title = %episode.title))]
    async fn insert(&self, episode: NewEpisode) -> EpisodicResult<Episode> {
        let new_row = NewEpisodeRow::from(episode);
        self.with_connection(move |conn| {
            let result = diesel::insert_into(episodes::table)
                .values(&new_row)
                .returning(EpisodeRow::as_returning())
                .get_result(conn);

            match result {
                Ok(row) => {
                    debug!(id = row.id, "Episode stored");
                    Ok(Episode::from(row))
                }
                Err(DieselError::DatabaseError(DieselErrorKind::UniqueViolation, _)) => {
                    debug!("Title already stored");
                    Err(EpisodeExistsError::new(new_row.title).into())
                }
                Err(e) => Err(DatabaseError::from(e).into()),
            }
        })
        .await
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

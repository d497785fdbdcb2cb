//! Database connection utilities.

use crate::DatabaseResult;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use episodic_error::{DatabaseError, DatabaseErrorKind};
use tracing::{debug, info};

/// Pooled SQLite connections.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Per-connection pragmas applied when the pool opens a connection.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON;",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Translate a connection URL into a path SQLite understands.
///
/// Accepts plain paths, `:memory:`, and the `sqlite://` URL forms
/// (`sqlite:///relative.db`, `sqlite:////absolute.db`, bare `sqlite://` for
/// an in-memory database).
pub(crate) fn normalize_url(database_url: &str) -> String {
    match database_url.strip_prefix("sqlite://") {
        Some("") => ":memory:".to_string(),
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest).to_string(),
        None => database_url.to_string(),
    }
}

/// Create a connection pool for the SQLite database at `database_url`.
///
/// # Errors
///
/// Returns an error if the pool cannot open its initial connections.
pub fn create_pool(database_url: &str, pool_size: u32) -> DatabaseResult<SqlitePool> {
    let path = normalize_url(database_url);
    if path == ":memory:" {
        return create_memory_pool();
    }

    debug!(path = %path, pool_size, "Creating SQLite connection pool");
    let manager = ConnectionManager::<SqliteConnection>::new(path);
    Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }))
        .build(manager)
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Connection(format!(
                "Failed to create connection pool: {}",
                e
            )))
        })
}

/// Create a single-connection pool over a private in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool holds
/// exactly one connection and never recycles it.
pub fn create_memory_pool() -> DatabaseResult<SqlitePool> {
    debug!("Creating in-memory SQLite connection pool");
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    Pool::builder()
        .max_size(1)
        .max_lifetime(None)
        .idle_timeout(None)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }))
        .build(manager)
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Connection(format!(
                "Failed to create in-memory pool: {}",
                e
            )))
        })
}

/// Apply any pending embedded migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> DatabaseResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    if !applied.is_empty() {
        info!(count = applied.len(), "Applied database migrations");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_path() {
        assert_eq!(normalize_url("db.sqlite"), "db.sqlite");
        assert_eq!(normalize_url(":memory:"), ":memory:");
    }

    #[test]
    fn test_normalize_sqlite_urls() {
        assert_eq!(normalize_url("sqlite:///db.sqlite"), "db.sqlite");
        assert_eq!(normalize_url("sqlite:////var/lib/episodic.db"), "/var/lib/episodic.db");
        assert_eq!(normalize_url("sqlite://"), ":memory:");
    }
}

//! SQLite integration for Episodic.
//!
//! This crate provides the schema, row models and the Diesel-backed
//! [`DatabaseEpisodeStore`].
//!
//! # Features
//!
//! - Diesel-based SQLite integration with r2d2 connection pooling
//! - Embedded migrations, applied when a store is opened
//! - Title uniqueness enforced by a `UNIQUE` constraint
//!
//! # Example
//!
//! ```rust,no_run
//! use episodic_database::DatabaseEpisodeStore;
//! use episodic_interface::EpisodeStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DatabaseEpisodeStore::open("db.sqlite", 10)?;
//! let episodes = store.list().await?;
//! # Ok(())
//! # }
//! ```

mod connection;
mod episode_repository;
mod models;

// Public modules for external access
pub mod schema;

pub use connection::{SqlitePool, create_pool, create_memory_pool, run_migrations};
pub use episode_repository::{DEFAULT_POOL_SIZE, DatabaseEpisodeStore};
pub use models::{EpisodeRow, NewEpisodeRow};

use episodic_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

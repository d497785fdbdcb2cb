//! In-memory episode storage for Episodic.
//!
//! Provides [`InMemoryEpisodeStore`], the [`EpisodeStore`](episodic_interface::EpisodeStore)
//! used when no database is configured and in tests. Records are lost when
//! the store is dropped.
//!
//! # Example
//!
//! ```rust
//! use episodic_core::NewEpisode;
//! use episodic_interface::EpisodeStore;
//! use episodic_storage::InMemoryEpisodeStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryEpisodeStore::new();
//! let stored = store
//!     .insert(NewEpisode::new("Pilot", "First one.", "Ann"))
//!     .await?;
//! assert_eq!(stored.id, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

pub use memory::InMemoryEpisodeStore;

//! Error types for the Episodic service.
//!
//! This crate provides the error types shared by every Episodic crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or the identifying data) with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three service failures that the HTTP layer renders are distinct types:
//! [`EpisodeExistsError`], [`EpisodeNotFoundError`] and [`GenerationError`].
//!
//! # Examples
//!
//! ```
//! use episodic_error::{EpisodicResult, EpisodeNotFoundError};
//!
//! fn lookup(id: i32) -> EpisodicResult<String> {
//!     Err(EpisodeNotFoundError::new(id))?
//! }
//!
//! match lookup(7) {
//!     Ok(title) => println!("Got: {}", title),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod episode;
mod error;
mod generation;
mod prompter;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use episode::{EpisodeExistsError, EpisodeNotFoundError};
pub use error::{EpisodicError, EpisodicErrorKind, EpisodicResult};
pub use generation::GenerationError;
pub use prompter::{PrompterError, PrompterErrorKind};

//! Trait definitions for the Episodic service.
//!
//! This crate provides the capability traits the HTTP layer is written
//! against: [`EpisodeStore`] for record storage and [`Prompter`] for text
//! generation. Implementations live in `episodic_storage`,
//! `episodic_database` and `episodic_models`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{EpisodeStore, Prompter};

//! Core data types for the Episodic podcast episode service.
//!
//! This crate provides the episode records and the alternative-generation
//! request/response shapes shared by the store, the HTTP layer and clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alternative;
mod episode;

pub use alternative::{AlternativeRequest, AlternativeResponse, AlternativeTarget};
pub use episode::{Episode, NewEpisode};

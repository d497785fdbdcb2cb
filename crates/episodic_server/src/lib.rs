//! HTTP surface for the Episodic podcast episode service.
//!
//! This crate assembles the axum [`Router`](axum::Router) serving
//!
//! - `GET /episodes`
//! - `POST /episodes`
//! - `POST /episodes/{id}/generate_alternative`
//!
//! Handler failures are [`EpisodicError`](episodic_error::EpisodicError)s and
//! are turned into responses by the [`ErrorRegistry`] carried in [`AppState`].
//!
//! # Example
//!
//! ```rust
//! use episodic_server::{AppState, ServiceConfig, create_router, default_registry};
//! use std::sync::Arc;
//! # use async_trait::async_trait;
//! # use episodic_error::EpisodicResult;
//! # use episodic_interface::Prompter;
//! # struct Echo;
//! # #[async_trait]
//! # impl Prompter for Echo {
//! #     async fn prompt(&self, _system: &str, user: &str) -> EpisodicResult<String> {
//! #         Ok(user.to_string())
//! #     }
//! # }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::default();
//! let state = AppState::new(config.open_store()?, Arc::new(Echo), default_registry());
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod handlers;
mod registry;
mod router;
mod state;

pub use config::{DEFAULT_BIND, ServiceConfig};
pub use handlers::{create_episode, generate_alternative, list_episodes};
pub use registry::{ErrorRegistry, ErrorRegistryBuilder, ErrorResponse, default_registry};
pub use router::create_router;
pub use state::AppState;

//! Episodic - podcast episode service
//!
//! Episodic stores podcast episode records and asks a hosted text-generation
//! API for alternative titles and descriptions.
//!
//! # Features
//!
//! - **Episode CRUD**: list and create episodes, titles are unique
//! - **Alternatives**: rewrite a title or description through a [`Prompter`]
//! - **Error registry**: failures map to HTTP responses through [`ErrorRegistry`]
//! - **Storage**: in-memory or SQLite, selected by configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use episodic::{
//!     AppState, DeepSeekPrompter, PrompterConfig, ServiceConfig, create_router,
//!     default_registry,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::default();
//!     let prompter = Arc::new(DeepSeekPrompter::new(PrompterConfig::from_env()));
//!     let state = AppState::new(config.open_store()?, prompter, default_registry());
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind).await?;
//!     axum::serve(listener, create_router(state)).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - export tracing spans through OpenTelemetry
//!
//! # Architecture
//!
//! - `episodic_error` - Error types
//! - `episodic_core` - Episode and alternative data types
//! - `episodic_interface` - `EpisodeStore` and `Prompter` traits
//! - `episodic_storage` - In-memory store
//! - `episodic_database` - SQLite store
//! - `episodic_models` - DeepSeek prompter
//! - `episodic_server` - axum router, handlers and error registry
//!
//! This crate (`episodic`) re-exports everything for convenience.

mod logging;

pub use episodic_core::*;
pub use episodic_database::{DEFAULT_POOL_SIZE, DatabaseEpisodeStore};
pub use episodic_error::*;
pub use episodic_interface::*;
pub use episodic_models::{DeepSeekPrompter, PrompterConfig};
pub use episodic_server::*;
pub use episodic_storage::InMemoryEpisodeStore;
pub use logging::{LoggingConfig, init_logging};

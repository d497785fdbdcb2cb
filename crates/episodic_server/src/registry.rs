//! Error-to-response registry.
//!
//! Handlers fail with [`EpisodicError`]. The registry maps the concrete error
//! carried inside to a renderer producing a status code and a JSON
//! `{"message": ...}` body. The table is assembled once with
//! [`ErrorRegistryBuilder`] and cannot change after [`ErrorRegistryBuilder::build`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use episodic_error::{EpisodeExistsError, EpisodeNotFoundError, EpisodicError, GenerationError};
use serde::Serialize;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
};
use tracing::{debug, warn};

/// Body of every rendered error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// Status and message produced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Message sent to the caller
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

type Renderer = Box<dyn Fn(&dyn Any) -> Option<ErrorResponse> + Send + Sync>;

struct Entry {
    name: &'static str,
    render: Renderer,
}

/// Frozen table of error renderers.
///
/// # Examples
///
/// ```
/// use axum::http::StatusCode;
/// use episodic_error::{EpisodicError, EpisodeNotFoundError};
/// use episodic_server::{ErrorRegistry, ErrorResponse};
///
/// let registry = ErrorRegistry::builder()
///     .register::<EpisodeNotFoundError>(|e| {
///         ErrorResponse::new(StatusCode::NOT_FOUND, format!("no episode {}", e.id))
///     })
///     .build();
///
/// let err: EpisodicError = EpisodeNotFoundError::new(3).into();
/// assert_eq!(registry.render(&err).status(), StatusCode::NOT_FOUND);
/// ```
pub struct ErrorRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl ErrorRegistry {
    /// Start assembling a registry.
    pub fn builder() -> ErrorRegistryBuilder {
        ErrorRegistryBuilder::default()
    }

    /// Whether a renderer is registered for `E`.
    pub fn is_registered<E: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<E>())
    }

    /// Number of registered error types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no error type is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the registered response for `error`, if its type is registered.
    pub fn lookup(&self, error: &EpisodicError) -> Option<ErrorResponse> {
        let inner = error.kind().as_any();
        let entry = self.entries.get(&Any::type_id(inner))?;
        debug!(error_type = entry.name, "Rendering registered error");
        (entry.render)(inner)
    }

    /// Render `error` as an HTTP response.
    ///
    /// Unregistered errors become a plain-text 500.
    pub fn render(&self, error: &EpisodicError) -> Response {
        match self.lookup(error) {
            Some(response) => response.into_response(),
            None => {
                debug!(error = %error, "No renderer registered, using fallback");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl std::fmt::Debug for ErrorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.name).collect();
        names.sort_unstable();
        f.debug_struct("ErrorRegistry").field("types", &names).finish()
    }
}

/// Assembles an [`ErrorRegistry`].
#[derive(Default)]
pub struct ErrorRegistryBuilder {
    entries: HashMap<TypeId, Entry>,
}

impl ErrorRegistryBuilder {
    /// Associate error type `E` with a renderer.
    ///
    /// Registration is one-way: a second renderer for the same type is
    /// ignored and the first one stays in place.
    pub fn register<E: Any>(mut self, renderer: fn(&E) -> ErrorResponse) -> Self {
        let name = std::any::type_name::<E>();
        let type_id = TypeId::of::<E>();

        if self.entries.contains_key(&type_id) {
            warn!(error_type = name, "Renderer already registered, keeping the first");
            return self;
        }

        debug!(error_type = name, "Registering error renderer");
        let render: Renderer =
            Box::new(move |error: &dyn Any| error.downcast_ref::<E>().map(renderer));
        self.entries.insert(type_id, Entry { name, render });
        self
    }

    /// Freeze the table.
    pub fn build(self) -> ErrorRegistry {
        ErrorRegistry {
            entries: self.entries,
        }
    }
}

/// Registry with the three service failures installed.
///
/// - [`EpisodeExistsError`] renders 409
/// - [`EpisodeNotFoundError`] renders 404
/// - [`GenerationError`] renders 500 without exposing the cause
pub fn default_registry() -> ErrorRegistry {
    ErrorRegistry::builder()
        .register::<EpisodeExistsError>(|e| {
            ErrorResponse::new(
                StatusCode::CONFLICT,
                format!("Episode with title '{}' already exists", e.title),
            )
        })
        .register::<EpisodeNotFoundError>(|e| {
            ErrorResponse::new(
                StatusCode::NOT_FOUND,
                format!("Episode with id {} not found", e.id),
            )
        })
        .register::<GenerationError>(|_| {
            ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error while generating alternative",
            )
        })
        .build()
}

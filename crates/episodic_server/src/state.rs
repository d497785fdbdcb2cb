//! Shared application state.

use crate::ErrorRegistry;
use episodic_interface::{EpisodeStore, Prompter};
use std::sync::Arc;

/// Dependencies handed to every request handler.
///
/// Cloning is cheap; all members are shared.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EpisodeStore>,
    prompter: Arc<dyn Prompter>,
    errors: Arc<ErrorRegistry>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        store: Arc<dyn EpisodeStore>,
        prompter: Arc<dyn Prompter>,
        errors: ErrorRegistry,
    ) -> Self {
        Self {
            store,
            prompter,
            errors: Arc::new(errors),
        }
    }

    /// Episode store.
    pub fn store(&self) -> &dyn EpisodeStore {
        self.store.as_ref()
    }

    /// Text-generation backend.
    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    /// Error registry used to render handler failures.
    pub fn errors(&self) -> &ErrorRegistry {
        &self.errors
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store.backend_name())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

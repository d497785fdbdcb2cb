//! HTTP routing.

use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Creates the episode API router.
///
/// The router needs a built [`AppState`], so the error registry is complete
/// before any request is served.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/episodes",
            get(handlers::list_episodes).post(handlers::create_episode),
        )
        .route(
            "/episodes/:id/generate_alternative",
            post(handlers::generate_alternative),
        )
        .with_state(state)
}

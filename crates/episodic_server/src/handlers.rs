//! Episode endpoints.

use crate::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use episodic_core::{AlternativeRequest, AlternativeResponse, Episode, NewEpisode};
use episodic_error::{EpisodeExistsError, EpisodeNotFoundError, EpisodicError, GenerationError};
use tracing::{info, instrument, warn};

/// Log a handler failure and render it through the registry.
fn reject(state: &AppState, error: EpisodicError) -> Response {
    warn!(error = %error, "Request failed");
    state.errors().render(&error)
}

/// List all stored episodes.
#[instrument(skip(state), fields(backend = state.store().backend_name()))]
pub async fn list_episodes(State(state): State<AppState>) -> Result<Json<Vec<Episode>>, Response> {
    let episodes = state
        .store()
        .list()
        .await
        .map_err(|e| reject(&state, e))?;
    Ok(Json(episodes))
}

/// Create an episode, rejecting a title that is already stored.
#[instrument(skip(state, episode), fields(title = %episode.title))]
pub async fn create_episode(
    State(state): State<AppState>,
    Json(episode): Json<NewEpisode>,
) -> Result<impl IntoResponse, Response> {
    let existing = state
        .store()
        .find_by_title(&episode.title)
        .await
        .map_err(|e| reject(&state, e))?;
    if existing.is_some() {
        return Err(reject(&state, EpisodeExistsError::new(episode.title).into()));
    }

    let stored = state
        .store()
        .insert(episode)
        .await
        .map_err(|e| reject(&state, e))?;
    info!(id = stored.id, "Episode created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Generate an alternative title or description for a stored episode.
#[instrument(skip(state, request), fields(target = %request.target))]
pub async fn generate_alternative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AlternativeRequest>,
) -> Result<Json<AlternativeResponse>, Response> {
    let episode = state
        .store()
        .find_by_id(id)
        .await
        .map_err(|e| reject(&state, e))?
        .ok_or_else(|| reject(&state, EpisodeNotFoundError::new(id).into()))?;

    let generated = state
        .prompter()
        .prompt(&request.prompt, request.target.select(&episode))
        .await
        .map_err(|e| reject(&state, GenerationError::new(e.to_string()).into()))?;
    info!(id, "Alternative generated");

    Ok(Json(AlternativeResponse {
        original_episode: episode,
        target: request.target,
        prompt: request.prompt,
        generated_alternative: generated,
    }))
}

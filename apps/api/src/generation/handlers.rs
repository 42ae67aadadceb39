//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::generation::models::{BlogPost, GenerationRequest};
use crate::state::AppState;

/// POST /api/v1/generate
///
/// Validates the topic, then hands the request to the configured writer.
/// Malformed bodies are rejected with the same 400 error shape as a missing topic.
/// Provider failures are absorbed by the writer; only unexpected errors surface as 500.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<BlogPost>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let request = request.into_validated()?;

    info!(
        "Generating {:?} {:?} post on {:?} ({} keywords)",
        request.tone,
        request.length,
        request.topic,
        request.keywords.len()
    );

    let post = state.writer.write(&request).await?;

    info!(
        "Generated post {:?} with {} sections",
        post.title,
        post.outline.len()
    );

    Ok(Json(post))
}

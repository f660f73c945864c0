//! Axum route handlers for the profile assistant.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::assist::generator::{assist, AssistRequest, AssistResponse};
use crate::errors::AppError;
use crate::matching::{find_similar_response, SIMILARITY_THRESHOLD};
use crate::models::ai_response::MatchResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub matched: bool,
    pub threshold: f64,
    #[serde(rename = "match")]
    pub best_match: Option<MatchResult>,
}

/// POST /api/v1/profile/assist
///
/// Returns a cached response when a similar prompt was answered before,
/// otherwise generates one and caches it.
pub async fn handle_assist(
    State(state): State<AppState>,
    Json(request): Json<AssistRequest>,
) -> Result<Json<AssistResponse>, AppError> {
    let response = assist(state.store.as_ref(), state.generator.as_ref(), request).await?;
    Ok(Json(response))
}

/// POST /api/v1/profile/assist/lookup
///
/// Runs only the similarity lookup. Never generates.
pub async fn handle_lookup(
    State(state): State<AppState>,
    Json(request): Json<AssistRequest>,
) -> Result<Json<LookupResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let best_match = find_similar_response(
        state.store.as_ref(),
        &request.prompt,
        request.category,
        request.role.as_deref(),
    )
    .await;

    Ok(Json(LookupResponse {
        matched: best_match.is_some(),
        threshold: SIMILARITY_THRESHOLD,
        best_match,
    }))
}

//! Score submission handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use super::AppState;
use crate::http::error::ApiError;
use crate::http::types::{CreatedResponse, ScoreRequest};
use crate::types::ScoreDocument;

/// Score submission endpoint
///
/// Schema rejection happens before any database call: a body that does
/// not deserialize (non-numeric score, missing player) is a 400.
pub async fn player_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    if request.player.is_empty() {
        return Err(ApiError::Validation("player must not be empty".to_string()));
    }

    debug!(player = %request.player, score = request.score, "recording score");

    let document = ScoreDocument::new(request.player, request.score, request.context);
    let id = state.store.insert_score(&document).await?;

    Ok(Json(CreatedResponse {
        message: "Score recorded".to_string(),
        id: id.to_hex(),
    }))
}

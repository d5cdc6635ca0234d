//! HTTP API Route Definitions

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers::{self, AppState};

/// Headroom for multipart boundaries and metadata fields on top of the
/// configured file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(handlers::health))
        .route("/upload_sprite", post(handlers::upload_sprite))
        .route("/upload_audio", post(handlers::upload_audio))
        .route("/player_score", post(handlers::player_score))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

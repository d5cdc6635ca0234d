//! System handlers: health

use axum::{response::IntoResponse, Json};

use crate::http::types::HealthResponse;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

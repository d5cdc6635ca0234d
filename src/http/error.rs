//! HTTP API error type
//!
//! Two failure kinds exist: the client sent a malformed request, or the
//! database write failed. Both render as a JSON `{code, message}` body.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use super::types::ErrorResponse;

/// Errors surfaced by the request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields
    #[error("{0}")]
    Validation(String),
    /// Uploaded payload exceeds the configured limit
    #[error("payload of {size} bytes exceeds the {limit} byte upload limit")]
    PayloadTooLarge { size: usize, limit: usize },
    /// Database unreachable or write failure
    #[error("storage operation failed: {0}")]
    Storage(#[from] mongodb::error::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "BAD_REQUEST",
            Self::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            // The body limit layer tripped before the handler saw the bytes.
            Self::PayloadTooLarge { size: 0, limit: 0 }
        } else {
            Self::Validation(err.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(err) => error!("storage error: {err}"),
            other => debug!("rejected request: {other}"),
        }

        let message = match &self {
            // Body-limit rejections carry no useful sizes; keep the message generic.
            Self::PayloadTooLarge { size: 0, limit: 0 } => "uploaded payload is too large".to_string(),
            other => other.to_string(),
        };

        (self.status(), Json(ErrorResponse::new(self.code(), message))).into_response()
    }
}

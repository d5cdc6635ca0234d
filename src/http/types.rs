//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Score submission request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Player identifier
    pub player: String,
    /// Score value; schema rejection turns a non-integer into a 400
    pub score: i64,
    /// Optional game or level context
    #[serde(default)]
    pub context: Option<String>,
}

/// Response for a successfully created record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Hex identifier of the new document
    pub id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_request_accepts_integer_score() {
        let request: ScoreRequest =
            serde_json::from_str(r#"{"player":"p1","score":42,"context":"level1"}"#).unwrap();
        assert_eq!(request.player, "p1");
        assert_eq!(request.score, 42);
        assert_eq!(request.context.as_deref(), Some("level1"));
    }

    #[test]
    fn score_request_context_is_optional() {
        let request: ScoreRequest = serde_json::from_str(r#"{"player":"p1","score":0}"#).unwrap();
        assert!(request.context.is_none());
    }

    #[test]
    fn score_request_rejects_non_numeric_score() {
        let result = serde_json::from_str::<ScoreRequest>(r#"{"player":"p1","score":"forty-two"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn score_request_rejects_missing_player() {
        let result = serde_json::from_str::<ScoreRequest>(r#"{"score":42}"#);
        assert!(result.is_err());
    }
}

//! HTTP API Request Handlers
//!
//! Handlers that map HTTP requests to store operations. Each handler is
//! a single-shot transaction: validate, insert one document, respond.

mod media;
mod scores;
mod system;

use std::sync::Arc;

use crate::store::MediaStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MediaStore>,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

// Re-export all handlers
pub use media::{upload_audio, upload_sprite};
pub use scores::player_score;
pub use system::health;

//! HTTP API
//!
//! Axum-based HTTP surface: three POST endpoints plus a health check.

mod error;
pub mod handlers;
mod routes;
mod server;
pub mod types;

pub use error::ApiError;
pub use handlers::AppState;
pub use routes::create_router;
pub use server::HttpServer;

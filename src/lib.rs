//! Gamestash: multimedia asset and player score backend
//!
//! A small REST service for game clients, featuring:
//! - Sprite and audio uploads via multipart form data
//! - Player score submission as JSON
//! - MongoDB document storage (one collection per record kind)
//!
//! Every request is a single independent transaction: validate the
//! payload, write one document, return the generated identifier.

pub mod config;
pub mod http;
pub mod store;
pub mod types;

pub use config::Config;
pub use store::MediaStore;

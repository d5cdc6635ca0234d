//! Stored document shapes
//!
//! One struct per MongoDB collection. Identifiers are generated at
//! insertion time and never reused; documents are write-once.

use mongodb::bson::{oid::ObjectId, spec::BinarySubtype, Binary, DateTime};
use serde::{Deserialize, Serialize};

/// The two kinds of binary asset this service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Sprite,
    Audio,
}

impl AssetKind {
    /// Collection the asset documents live in.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Sprite => "sprites",
            Self::Audio => "audio",
        }
    }

    /// Content-type prefix an upload must declare to be accepted.
    pub fn content_scope(&self) -> &'static str {
        match self {
            Self::Sprite => "image/",
            Self::Audio => "audio/",
        }
    }

    /// Human-readable label used in response messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sprite => "Sprite",
            Self::Audio => "Audio file",
        }
    }
}

/// A stored sprite or audio asset.
///
/// The binary payload is embedded in the document exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Original filename as sent by the client
    pub filename: String,
    /// Declared content type ("application/octet-stream" if undeclared)
    pub content_type: String,
    /// File bytes, stored untransformed
    pub content: Binary,
    /// Upload timestamp
    pub uploaded_at: DateTime,
}

impl AssetDocument {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: ObjectId::new(),
            filename: filename.into(),
            content_type: content_type.into(),
            content: Binary {
                subtype: BinarySubtype::Generic,
                bytes,
            },
            uploaded_at: DateTime::now(),
        }
    }

    /// The stored payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.content.bytes
    }
}

/// A submitted player score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Player identifier
    pub player: String,
    /// Score value
    pub score: i64,
    /// Game or level context, if the client provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Submission timestamp
    pub submitted_at: DateTime,
}

impl ScoreDocument {
    pub fn new(player: impl Into<String>, score: i64, context: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            player: player.into(),
            score,
            context,
            submitted_at: DateTime::now(),
        }
    }
}

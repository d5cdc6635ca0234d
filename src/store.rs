//! MongoDB-backed persistence
//!
//! Thin wrapper over the async MongoDB driver. The client is created
//! lazily (no I/O until the first operation) and is safe to share
//! across request handlers by construction of the driver.

use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client, Collection, Database,
};
use std::time::Duration;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::types::{AssetDocument, AssetKind, ScoreDocument};

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, mongodb::error::Error>;

/// Handle to the asset and score collections.
#[derive(Clone)]
pub struct MediaStore {
    db: Database,
}

impl MediaStore {
    /// Build a store from the database configuration.
    ///
    /// Parses the connection string and configures timeouts; the driver
    /// does not dial the server until the first insert.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        let timeout = Duration::from_secs(config.connect_timeout_secs);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name.get_or_insert_with(|| "gamestash".to_string());

        let client = Client::with_options(options)?;
        debug!(database = %config.name, "configured MongoDB client");

        Ok(Self {
            db: client.database(&config.name),
        })
    }

    fn assets(&self, kind: AssetKind) -> Collection<AssetDocument> {
        self.db.collection(kind.collection())
    }

    fn scores(&self) -> Collection<ScoreDocument> {
        self.db.collection("scores")
    }

    /// Persist one asset document, returning its identifier.
    pub async fn insert_asset(&self, kind: AssetKind, document: &AssetDocument) -> StoreResult<ObjectId> {
        self.assets(kind).insert_one(document).await?;
        Ok(document.id)
    }

    /// Fetch one asset document by identifier.
    pub async fn find_asset(&self, kind: AssetKind, id: ObjectId) -> StoreResult<Option<AssetDocument>> {
        self.assets(kind).find_one(doc! { "_id": id }).await
    }

    /// Persist one score document, returning its identifier.
    pub async fn insert_score(&self, document: &ScoreDocument) -> StoreResult<ObjectId> {
        self.scores().insert_one(document).await?;
        Ok(document.id)
    }

    /// Fetch one score document by identifier.
    pub async fn find_score(&self, id: ObjectId) -> StoreResult<Option<ScoreDocument>> {
        self.scores().find_one(doc! { "_id": id }).await
    }
}

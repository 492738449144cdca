use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use thiserror::Error;

use super::collections::Collection;

/// Errors raised by a `DocumentStore`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Store returned a non-ObjectId identifier for {0}")]
    UnexpectedId(&'static str),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Single-collection document operations the handlers rely on.
///
/// Filters are exact-match: every key in the filter must be present in the
/// record with an equal value. Updates replace the listed fields (`$set`).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a record and return the identifier the store assigned to it
    async fn insert_one(&self, collection: Collection, record: Document) -> Result<ObjectId, StoreError>;

    async fn find_one(&self, collection: Collection, filter: Document) -> Result<Option<Document>, StoreError>;

    /// All matching records in natural (insertion) order
    async fn find_many(&self, collection: Collection, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Set `fields` on the first record matching `filter`; returns whether one matched
    async fn update_one(&self, collection: Collection, filter: Document, fields: Document) -> Result<bool, StoreError>;

    /// Remove the first record matching `filter`; returns whether one was removed
    async fn delete_one(&self, collection: Collection, filter: Document) -> Result<bool, StoreError>;

    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once after the server stops accepting requests.
    async fn shutdown(&self);
}

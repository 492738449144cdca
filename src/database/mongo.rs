use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{debug, info};

use super::collections::Collection;
use super::store::{DocumentStore, StoreError};
use crate::config::DatabaseConfig;

/// `DocumentStore` backed by a MongoDB database.
///
/// The driver connects lazily, so construction only parses options. The
/// first operation (or `ping`) opens the connection pool.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let uri = config
            .uri
            .as_deref()
            .ok_or(StoreError::ConfigMissing("MONGODB_URI"))?;

        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout = Some(Duration::from_secs(config.server_selection_timeout_secs));
        if let Some(max) = config.max_pool_size {
            options.max_pool_size = Some(max);
        }

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);
        info!("Configured MongoDB store for database: {}", config.name);

        Ok(Self { client, database })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.database.collection::<Document>(collection.name())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: Collection, record: Document) -> Result<ObjectId, StoreError> {
        debug!(%collection, "insert_one");
        let result = self.collection(collection).insert_one(record).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::UnexpectedId(collection.name()))
    }

    async fn find_one(&self, collection: Collection, filter: Document) -> Result<Option<Document>, StoreError> {
        debug!(%collection, ?filter, "find_one");
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn find_many(&self, collection: Collection, filter: Document) -> Result<Vec<Document>, StoreError> {
        debug!(%collection, ?filter, "find_many");
        let cursor = self.collection(collection).find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_one(&self, collection: Collection, filter: Document, fields: Document) -> Result<bool, StoreError> {
        debug!(%collection, ?filter, "update_one");
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, collection: Collection, filter: Document) -> Result<bool, StoreError> {
        debug!(%collection, ?filter, "delete_one");
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("Closed MongoDB client");
    }
}

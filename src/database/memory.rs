use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use super::collections::Collection;
use super::store::{DocumentStore, StoreError};

/// Process-local store with the same exact-match semantics as `MongoStore`.
///
/// Used for development runs without a database (`STORE_BACKEND=memory`) and
/// by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `collection`
    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: Collection, record: Document) -> Result<ObjectId, StoreError> {
        let id = match record.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => ObjectId::new(),
        };

        let mut stored = Document::new();
        stored.insert("_id", id);
        for (key, value) in record {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        self.collections.write().await.entry(collection).or_default().push(stored);
        Ok(id)
    }

    async fn find_one(&self, collection: Collection, filter: Document) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|records| records.iter().find(|r| matches(r, &filter)))
            .cloned())
    }

    async fn find_many(&self, collection: Collection, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|records| records.iter().filter(|r| matches(r, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn update_one(&self, collection: Collection, filter: Document, fields: Document) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(record) = collections
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| matches(r, &filter)))
        else {
            return Ok(false);
        };

        for (key, value) in fields {
            record.insert(key, value);
        }
        Ok(true)
    }

    async fn delete_one(&self, collection: Collection, filter: Document) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(&collection) else {
            return Ok(false);
        };

        match records.iter().position(|r| matches(r, &filter)) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn shutdown(&self) {
        self.collections.write().await.clear();
    }
}

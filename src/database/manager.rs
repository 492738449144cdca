use std::sync::Arc;

use tracing::info;

use super::memory::MemoryStore;
use super::mongo::MongoStore;
use super::store::{DocumentStore, StoreError};
use crate::config::{DatabaseConfig, StoreBackend};

/// Owns the process-wide store handle between startup and shutdown.
///
/// The handle is created once by `connect`, shared with handlers through the
/// router state, and closed by `shutdown` after the server has drained.
pub struct DatabaseManager {
    store: Arc<dyn DocumentStore>,
}

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn DocumentStore> = match config.backend {
            StoreBackend::Mongo => Arc::new(MongoStore::connect(config).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        info!("Database store ready ({:?})", config.backend);

        Ok(Self { store })
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.store)
    }

    /// Close the store (e.g., on shutdown)
    pub async fn shutdown(self) {
        self.store.shutdown().await;
        info!("Database store closed");
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use melo_api::config::AppConfig;
use melo_api::database::{Collection, DocumentStore, MemoryStore, StoreError};
use melo_api::{app, AppState};
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{json, Value};

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve the real router on an ephemeral port, backed by `store`.
pub async fn spawn_with(store: Arc<dyn DocumentStore>) -> Result<TestServer> {
    spawn_with_config(store, AppConfig::development()).await
}

pub async fn spawn_with_config(store: Arc<dyn DocumentStore>, mut config: AppConfig) -> Result<TestServer> {
    config.api.enable_request_logging = false;

    let router = app(AppState::new(store), &config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    })
}

/// Server with a fresh in-memory store; the store is returned for direct inspection.
pub async fn spawn() -> Result<(TestServer, Arc<MemoryStore>)> {
    let store = Arc::new(MemoryStore::new());
    let server = spawn_with(store.clone()).await?;
    Ok((server, store))
}

pub fn user_body() -> Value {
    json!({
        "name": "A",
        "email": "a@x.com",
        "phone": "000",
        "address": "addr",
        "genre": "pop"
    })
}

pub fn baby_body(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "name": "B",
        "sex": "female",
        "birth": "2024-03-01",
        "weeks": 39
    })
}

pub fn music_body(user_id: &str, baby_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "baby_id": baby_id,
        "genre": "jazz",
        "instrument": "piano",
        "speed": "slow",
        "duration": "1m30s"
    })
}

pub async fn create_user(server: &TestServer) -> Result<String> {
    let body: Value = server
        .client
        .post(server.url("/common/users"))
        .json(&user_body())
        .send()
        .await?
        .json()
        .await?;
    body["user_id"].as_str().map(str::to_string).context("missing user_id")
}

pub async fn create_baby(server: &TestServer, user_id: &str) -> Result<String> {
    let body: Value = server
        .client
        .post(server.url("/common/babies"))
        .json(&baby_body(user_id))
        .send()
        .await?
        .json()
        .await?;
    body["baby_id"].as_str().map(str::to_string).context("missing baby_id")
}

/// Store whose every operation fails, as a misconfigured or unreachable database would.
pub struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert_one(&self, _: Collection, _: Document) -> Result<ObjectId, StoreError> {
        Err(unreachable_error())
    }

    async fn find_one(&self, _: Collection, _: Document) -> Result<Option<Document>, StoreError> {
        Err(unreachable_error())
    }

    async fn find_many(&self, _: Collection, _: Document) -> Result<Vec<Document>, StoreError> {
        Err(unreachable_error())
    }

    async fn update_one(&self, _: Collection, _: Document, _: Document) -> Result<bool, StoreError> {
        Err(unreachable_error())
    }

    async fn delete_one(&self, _: Collection, _: Document) -> Result<bool, StoreError> {
        Err(unreachable_error())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_error())
    }

    async fn shutdown(&self) {}
}

/// Text carried by `UnreachableStore` errors; must never appear in a response.
pub const LEAK_MARKER: &str = "MONGODB_URI";

fn unreachable_error() -> StoreError {
    StoreError::ConfigMissing(LEAK_MARKER)
}

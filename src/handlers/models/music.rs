//! Generated music.
//!
//! Creation verifies the user and the baby, then stores a pending record whose
//! `music_url` stays null. Rendering is done outside this service.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{guard, ApiJson, ApiQuery, ApiResponse, ApiResult, EntityId, Shaper};
use crate::app::AppState;
use crate::database::{filter, Collection};
use crate::error::ApiError;
use crate::models::{to_document, MusicGenerateQuery, MusicRecord};

const SHAPE: Shaper = Shaper::with_id("id");

#[derive(Debug, Deserialize)]
pub struct MusicQuery {
    pub user_id: EntityId,
    pub baby_id: EntityId,
    pub music_id: EntityId,
}

impl MusicQuery {
    fn filter(&self) -> mongodb::bson::Document {
        filter::scoped(
            self.music_id.object_id(),
            &[("user_id", &self.user_id), ("baby_id", &self.baby_id)],
        )
    }
}

#[derive(Debug, Serialize)]
pub struct MusicIdResponse {
    pub music_id: String,
}

/// POST /models/music - request music generation (202, result arrives later)
pub async fn create(
    State(state): State<AppState>,
    ApiJson(item): ApiJson<MusicGenerateQuery>,
) -> ApiResult<MusicIdResponse> {
    guard("create_generated_music", create_music(state, item)).await
}

/// GET /models/music?user_id=&baby_id=&music_id=
pub async fn get(State(state): State<AppState>, ApiQuery(query): ApiQuery<MusicQuery>) -> ApiResult<Value> {
    guard("get_generated_music", get_music(state, query)).await
}

/// DELETE /models/music?user_id=&baby_id=&music_id=
pub async fn delete(State(state): State<AppState>, ApiQuery(query): ApiQuery<MusicQuery>) -> ApiResult<MusicIdResponse> {
    guard("delete_generated_music", delete_music(state, query)).await
}

async fn create_music(state: AppState, item: MusicGenerateQuery) -> anyhow::Result<ApiResponse<MusicIdResponse>> {
    let user = filter::by_id(item.user_id.object_id());
    if state.store.find_one(Collection::Users, user).await?.is_none() {
        return Err(ApiError::not_found("User Not found").into());
    }

    let baby = filter::by_id(item.baby_id.object_id());
    if state.store.find_one(Collection::Babies, baby).await?.is_none() {
        return Err(ApiError::not_found("Baby Not found").into());
    }

    let record = to_document(&MusicRecord::pending(item))?;
    let music_id = state.store.insert_one(Collection::Music, record).await?;
    tracing::info!(music_id = %music_id, "queued music generation request");

    Ok(ApiResponse::accepted(MusicIdResponse {
        music_id: EntityId::new(music_id).encoded(),
    }))
}

async fn get_music(state: AppState, query: MusicQuery) -> anyhow::Result<ApiResponse<Value>> {
    let music = state
        .store
        .find_one(Collection::Music, query.filter())
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(ApiResponse::success(SHAPE.shape(music)))
}

async fn delete_music(state: AppState, query: MusicQuery) -> anyhow::Result<ApiResponse<MusicIdResponse>> {
    let scope = query.filter();
    if state.store.find_one(Collection::Music, scope.clone()).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state.store.delete_one(Collection::Music, scope).await?;

    Ok(ApiResponse::success(MusicIdResponse {
        music_id: query.music_id.encoded(),
    }))
}

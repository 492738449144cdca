//! Generated album art images.
//!
//! Generation itself is not available, so creation always answers 501. Reads
//! and deletes work on records that already exist, filtered by their owning
//! user and baby without checking either exists.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{guard, project_field, ApiQuery, ApiResponse, ApiResult, EntityId};
use crate::app::AppState;
use crate::database::{filter, Collection};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub user_id: EntityId,
    pub baby_id: EntityId,
    pub image_id: EntityId,
}

impl ImageQuery {
    fn filter(&self) -> mongodb::bson::Document {
        filter::scoped(
            self.image_id.object_id(),
            &[("user_id", &self.user_id), ("baby_id", &self.baby_id)],
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ImageIdResponse {
    pub image_id: String,
}

/// POST /models/images - not implemented
pub async fn create() -> ApiError {
    ApiError::not_implemented("create_generated_albumart_image")
}

/// GET /models/images?user_id=&baby_id=&image_id= - the stored image content
pub async fn get(State(state): State<AppState>, ApiQuery(query): ApiQuery<ImageQuery>) -> ApiResult<Value> {
    guard("get_generated_albumart_image", get_image(state, query)).await
}

/// DELETE /models/images?user_id=&baby_id=&image_id=
pub async fn delete(State(state): State<AppState>, ApiQuery(query): ApiQuery<ImageQuery>) -> ApiResult<ImageIdResponse> {
    guard("delete_generated_albumart_image", delete_image(state, query)).await
}

async fn get_image(state: AppState, query: ImageQuery) -> anyhow::Result<ApiResponse<Value>> {
    let image = state
        .store
        .find_one(Collection::Images, query.filter())
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(ApiResponse::success(project_field(image, "content")))
}

async fn delete_image(state: AppState, query: ImageQuery) -> anyhow::Result<ApiResponse<ImageIdResponse>> {
    let scope = query.filter();
    if state.store.find_one(Collection::Images, scope.clone()).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state.store.delete_one(Collection::Images, scope).await?;

    Ok(ApiResponse::success(ImageIdResponse {
        image_id: query.image_id.encoded(),
    }))
}

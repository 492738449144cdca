use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{guard, ApiJson, ApiQuery, ApiResponse, ApiResult, EntityId, Shaper};
use crate::app::AppState;
use crate::database::{filter, Collection};
use crate::error::ApiError;
use crate::models::{to_document, User};

/// Users are returned without their store identifier
const SHAPE: Shaper = Shaper::without_id();

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: EntityId,
}

#[derive(Debug, Serialize)]
pub struct UserIdResponse {
    pub user_id: String,
}

/// POST /common/users - create a user
pub async fn create(State(state): State<AppState>, ApiJson(item): ApiJson<User>) -> ApiResult<UserIdResponse> {
    guard("create_user", create_user(state, item)).await
}

/// GET /common/users?user_id= - fetch a user
pub async fn get(State(state): State<AppState>, ApiQuery(query): ApiQuery<UserQuery>) -> ApiResult<Value> {
    guard("get_user", get_user(state, query)).await
}

/// PUT /common/users?user_id= - replace the submitted user fields
pub async fn update(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserQuery>,
    ApiJson(item): ApiJson<User>,
) -> ApiResult<UserIdResponse> {
    guard("update_user", update_user(state, query, item)).await
}

/// DELETE /common/users?user_id= - remove a user (babies are left in place)
pub async fn delete(State(state): State<AppState>, ApiQuery(query): ApiQuery<UserQuery>) -> ApiResult<UserIdResponse> {
    guard("delete_user", delete_user(state, query)).await
}

async fn create_user(state: AppState, item: User) -> anyhow::Result<ApiResponse<UserIdResponse>> {
    let user_id = state.store.insert_one(Collection::Users, to_document(&item)?).await?;

    Ok(ApiResponse::created(UserIdResponse {
        user_id: EntityId::new(user_id).encoded(),
    }))
}

async fn get_user(state: AppState, query: UserQuery) -> anyhow::Result<ApiResponse<Value>> {
    let user = state
        .store
        .find_one(Collection::Users, filter::by_id(query.user_id.object_id()))
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(ApiResponse::success(SHAPE.shape(user)))
}

async fn update_user(state: AppState, query: UserQuery, item: User) -> anyhow::Result<ApiResponse<UserIdResponse>> {
    let id = filter::by_id(query.user_id.object_id());
    if state.store.find_one(Collection::Users, id.clone()).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state.store.update_one(Collection::Users, id, to_document(&item)?).await?;

    Ok(ApiResponse::success(UserIdResponse {
        user_id: query.user_id.encoded(),
    }))
}

async fn delete_user(state: AppState, query: UserQuery) -> anyhow::Result<ApiResponse<UserIdResponse>> {
    let id = filter::by_id(query.user_id.object_id());
    if state.store.find_one(Collection::Users, id.clone()).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state.store.delete_one(Collection::Users, id).await?;

    Ok(ApiResponse::success(UserIdResponse {
        user_id: query.user_id.encoded(),
    }))
}

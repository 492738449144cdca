//! Baby records. This route group is deprecated but kept for existing clients.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{guard, ApiJson, ApiQuery, ApiResponse, ApiResult, EntityId, Shaper};
use crate::app::AppState;
use crate::database::{filter, Collection};
use crate::error::ApiError;
use crate::models::{to_document, Baby};

/// Babies expose their identifier as a string under `_id`
const SHAPE: Shaper = Shaper::with_id("_id");

#[derive(Debug, Deserialize)]
pub struct BabiesQuery {
    pub user_id: EntityId,
    #[serde(default, deserialize_with = "crate::api::empty_as_none")]
    pub baby_id: Option<EntityId>,
}

#[derive(Debug, Deserialize)]
pub struct BabyUpdateQuery {
    pub baby_id: EntityId,
}

#[derive(Debug, Deserialize)]
pub struct BabyQuery {
    pub user_id: EntityId,
    pub baby_id: EntityId,
}

#[derive(Debug, Serialize)]
pub struct BabyIdResponse {
    pub baby_id: String,
}

/// POST /common/babies - create a baby for an existing user
pub async fn create(State(state): State<AppState>, ApiJson(item): ApiJson<Baby>) -> ApiResult<BabyIdResponse> {
    guard("create_baby", create_baby(state, item)).await
}

/// GET /common/babies?user_id=[&baby_id=] - one baby, or every baby of the user
pub async fn get(State(state): State<AppState>, ApiQuery(query): ApiQuery<BabiesQuery>) -> ApiResult<Value> {
    guard("get_babies", get_babies(state, query)).await
}

/// PUT /common/babies?baby_id= - replace the submitted baby fields
pub async fn update(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BabyUpdateQuery>,
    ApiJson(item): ApiJson<Baby>,
) -> ApiResult<BabyIdResponse> {
    guard("update_baby", update_baby(state, query, item)).await
}

/// DELETE /common/babies?user_id=&baby_id= - remove a baby
pub async fn delete(State(state): State<AppState>, ApiQuery(query): ApiQuery<BabyQuery>) -> ApiResult<BabyIdResponse> {
    guard("delete_baby", delete_baby(state, query)).await
}

async fn create_baby(state: AppState, item: Baby) -> anyhow::Result<ApiResponse<BabyIdResponse>> {
    let owner = filter::by_id(item.user_id.object_id());
    if state.store.find_one(Collection::Users, owner).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    let baby_id = state.store.insert_one(Collection::Babies, to_document(&item)?).await?;

    Ok(ApiResponse::created(BabyIdResponse {
        baby_id: EntityId::new(baby_id).encoded(),
    }))
}

async fn get_babies(state: AppState, query: BabiesQuery) -> anyhow::Result<ApiResponse<Value>> {
    let owner = [("user_id", &query.user_id)];

    match query.baby_id {
        Some(baby_id) => {
            let baby = state
                .store
                .find_one(Collection::Babies, filter::scoped(baby_id.object_id(), &owner))
                .await?
                .ok_or_else(|| ApiError::not_found("Not found"))?;

            Ok(ApiResponse::success(SHAPE.shape(baby)))
        }
        None => {
            let babies = state
                .store
                .find_many(Collection::Babies, filter::references(&owner))
                .await?;

            Ok(ApiResponse::success(Value::Array(SHAPE.shape_all(babies))))
        }
    }
}

async fn update_baby(state: AppState, query: BabyUpdateQuery, item: Baby) -> anyhow::Result<ApiResponse<BabyIdResponse>> {
    let baby_id = query.baby_id.object_id();
    let scope = filter::scoped(baby_id, &[("user_id", &item.user_id)]);
    if state.store.find_one(Collection::Babies, scope).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state
        .store
        .update_one(Collection::Babies, filter::by_id(baby_id), to_document(&item)?)
        .await?;

    Ok(ApiResponse::success(BabyIdResponse {
        baby_id: query.baby_id.encoded(),
    }))
}

async fn delete_baby(state: AppState, query: BabyQuery) -> anyhow::Result<ApiResponse<BabyIdResponse>> {
    let scope = filter::scoped(query.baby_id.object_id(), &[("user_id", &query.user_id)]);
    if state.store.find_one(Collection::Babies, scope.clone()).await?.is_none() {
        return Err(ApiError::not_found("Not found").into());
    }

    state.store.delete_one(Collection::Babies, scope).await?;

    Ok(ApiResponse::success(BabyIdResponse {
        baby_id: query.baby_id.encoded(),
    }))
}

//! Chat endpoints. None are implemented; each answers 501 without touching the store.

use axum::extract::Path;

use crate::error::ApiError;

/// POST /chats/
pub async fn create() -> ApiError {
    ApiError::not_implemented("create_chat")
}

/// GET /chats/:user_id
pub async fn list(Path(_user_id): Path<String>) -> ApiError {
    ApiError::not_implemented("get_chats")
}

/// GET /chats/:user_id/:chat_id
pub async fn get(Path((_user_id, _chat_id)): Path<(String, String)>) -> ApiError {
    ApiError::not_implemented("get_chat")
}

/// DELETE /chats/:user_id/:chat_id
pub async fn delete(Path((_user_id, _chat_id)): Path<(String, String)>) -> ApiError {
    ApiError::not_implemented("delete_chat")
}

//! Letter endpoints. Same placeholder state as chats.

use axum::extract::Path;

use crate::error::ApiError;

/// POST /letters/
pub async fn create() -> ApiError {
    ApiError::not_implemented("create_letter")
}

/// GET /letters/:user_id
pub async fn list(Path(_user_id): Path<String>) -> ApiError {
    ApiError::not_implemented("get_letters")
}

/// GET /letters/:user_id/:letter_id
pub async fn get(Path((_user_id, _letter_id)): Path<(String, String)>) -> ApiError {
    ApiError::not_implemented("get_letter")
}

/// DELETE /letters/:user_id/:letter_id
pub async fn delete(Path((_user_id, _letter_id)): Path<(String, String)>) -> ApiError {
    ApiError::not_implemented("delete_letter")
}

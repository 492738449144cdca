//! Extractors that run request validation and report failures in the API error format.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// Query string extractor; rejections become `ApiError::BadRequest`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// JSON body extractor; shape mismatches become `ApiError::UnprocessableEntity`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

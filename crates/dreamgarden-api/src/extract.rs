use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json`, but malformed bodies come back as `ApiError::InvalidInput`
/// with the usual `{"message": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{info, warn};

use dreamgarden_types::api::{LoginRequest, SignupRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;

pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.signup(&req.username, &req.password).inspect_err(|e| {
        warn!("Signup for '{}' rejected: {}", req.username, e);
    })?;

    info!("New user {} ({})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.login(&req.username, &req.password).inspect_err(|_| {
        warn!("Failed login for '{}'", req.username);
    })?;

    Ok(Json(user))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.user(caller.id)?))
}

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::AppState;
use crate::error::ApiError;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller of a protected route, resolved by `require_user`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

/// Resolve `X-User-Id` to an existing user and attach it to the request.
/// This identifies the caller; it does not authenticate them.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".into()))?;

    let user_id: Uuid = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::Unauthorized(format!("malformed user id '{raw}'")))?;

    let user = state.user(user_id)?;

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        username: user.username,
    });
    Ok(next.run(req).await)
}

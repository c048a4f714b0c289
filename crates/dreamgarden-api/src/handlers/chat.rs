use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use dreamgarden_types::api::{ListQuery, SendChatMessageRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;

pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.chat_messages(caller.id, query.limit)?))
}

/// Stores the user's message and the assistant's reply together.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    ApiJson(req): ApiJson<SendChatMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let exchange = state.post_chat_message(caller.id, &req.message)?;
    debug!(
        "Chat {} -> {} for {}",
        exchange.user_message.id, exchange.ai_message.id, caller.username
    );
    Ok((StatusCode::CREATED, Json(exchange)))
}

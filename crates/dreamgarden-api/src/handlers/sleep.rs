use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};

use dreamgarden_types::api::{CreateSleepRecordRequest, ListQuery};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;

pub async fn list_sleep_records(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.sleep_records(caller.id, query.limit)?))
}

pub async fn create_sleep_record(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateSleepRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let date = req.date.clone();
    let created = state.create_sleep_record(caller.id, req).inspect_err(|e| {
        warn!("Sleep record for {} on {} rejected: {}", caller.username, date, e);
    })?;

    info!(
        "{} rated {} {} stars (+{} dewdrops, +{} sunlight)",
        caller.username,
        created.record.date,
        created.record.rating,
        created.record.dewdrops_earned,
        created.record.sunlight_earned,
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn sleep_stats(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let today = chrono::Local::now().date_naive();
    Ok(Json(state.sleep_stats(caller.id, today)?))
}

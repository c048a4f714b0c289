use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use dreamgarden_types::api::{CreateAlarmRequest, UpdateAlarmRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::CurrentUser;

pub async fn list_alarms(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let alarms = state.alarms(caller.id)?;
    debug!("{} has {} alarms", caller.username, alarms.len());
    Ok(Json(alarms))
}

pub async fn create_alarm(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    ApiJson(req): ApiJson<CreateAlarmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let alarm = state.create_alarm(caller.id, req)?;
    info!("{} set alarm {} for {}", caller.username, alarm.id, alarm.time);
    Ok((StatusCode::CREATED, Json(alarm)))
}

pub async fn update_alarm(
    State(state): State<AppState>,
    Path(alarm_id): Path<u64>,
    Extension(caller): Extension<CurrentUser>,
    ApiJson(req): ApiJson<UpdateAlarmRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let alarm = state.update_alarm(caller.id, alarm_id, req)?;
    Ok(Json(alarm))
}

pub async fn delete_alarm(
    State(state): State<AppState>,
    Path(alarm_id): Path<u64>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    state.delete_alarm(caller.id, alarm_id)?;
    info!("{} deleted alarm {}", caller.username, alarm_id);
    Ok(StatusCode::NO_CONTENT)
}

use axum::{Extension, Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;

pub async fn plant_state(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let plant = state.current_plant_state(caller.id)?;
    debug!("{}'s plant: {:?} at {}%", caller.username, plant.health, plant.growth);
    Ok(Json(plant))
}

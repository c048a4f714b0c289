use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::AppState;
use crate::handlers::{alarms, chat, garden, sleep, users};
use crate::middleware::require_user;

/// All HTTP routes. Everything except signup, login and the health probe
/// requires a resolvable `X-User-Id`.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/users", post(users::signup))
        .route("/api/login", post(users::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/user", get(users::me))
        .route("/api/alarms", get(alarms::list_alarms).post(alarms::create_alarm))
        .route("/api/alarms/{alarm_id}", put(alarms::update_alarm).delete(alarms::delete_alarm))
        .route(
            "/api/sleep-records",
            get(sleep::list_sleep_records).post(sleep::create_sleep_record),
        )
        .route("/api/sleep-records/stats", get(sleep::sleep_stats))
        .route("/api/garden", get(garden::plant_state))
        .route("/api/chat/messages", get(chat::get_messages).post(chat::send_message))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}

async fn health() -> &'static str {
    "ok"
}

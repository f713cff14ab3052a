use crate::{
    handler::ping_handler::ping,
    handler::time_handler::{list_times_handler, record_time_handler},
    state::AppState,
};
use axum::{Router, routing::get};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(ping))
        .route(
            "/current-time",
            get(record_time_handler).post(record_time_handler),
        )
        .route(
            "/show-time",
            get(list_times_handler).post(list_times_handler),
        )
        .with_state(app_state)
}

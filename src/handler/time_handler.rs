use crate::{
    error::ApiError,
    model::TimeRecord,
    service::time_log_service::{list_time_records, record_current_time},
    state::AppState,
};
use axum::{extract::State, response::Json};

/// Stores the current time and echoes the formatted timestamp.
///
/// The request body is never read.
pub async fn record_time_handler(
    State(app_state): State<AppState>,
) -> Result<Json<String>, ApiError> {
    let record = record_current_time(&app_state).await?;
    Ok(Json(record.timestamp))
}

/// Lists every stored record, ascending by id.
pub async fn list_times_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TimeRecord>>, ApiError> {
    Ok(Json(list_time_records(&app_state).await?))
}

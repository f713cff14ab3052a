use crate::{clock::format_timestamp, model::TimeRecord, state::AppState, store::StoreError};
use std::time::Instant;
use tracing::{debug, error};

/// Formats "now" in the configured zone and stores it.
pub async fn record_current_time(app_state: &AppState) -> Result<TimeRecord, StoreError> {
    let timestamp = format_timestamp(app_state.clock.now(), &app_state.timezone);
    let now = Instant::now();

    let result = app_state.store.insert(timestamp).await;

    app_state.metrics.record_insert_elapsed(now.elapsed());

    match result {
        Ok(record) => {
            debug!("Recorded time {} as id {}", record.timestamp, record.id);
            Ok(record)
        }
        Err(e) => {
            error!("Failed to insert timestamp: {}", e);
            Err(e)
        }
    }
}

pub async fn list_time_records(app_state: &AppState) -> Result<Vec<TimeRecord>, StoreError> {
    let now = Instant::now();

    let result = app_state.store.list_all().await;

    app_state.metrics.record_list_elapsed(now.elapsed());

    match result {
        Ok(records) => {
            app_state.metrics.record_rows_listed(records.len());
            Ok(records)
        }
        Err(e) => {
            error!("Failed to list time records: {}", e);
            Err(e)
        }
    }
}

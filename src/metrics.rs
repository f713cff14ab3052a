use std::time::Duration;
use tracing::info;

pub trait Metrics: Send + Sync {
    fn record_insert_elapsed(&self, elapsed: Duration);
    fn record_list_elapsed(&self, elapsed: Duration);
    fn record_rows_listed(&self, rows: usize);
}

pub struct LoggingMetrics;

impl Metrics for LoggingMetrics {
    fn record_insert_elapsed(&self, elapsed: Duration) {
        info!(target: "metrics", elapsed_ms = elapsed.as_millis(), "Recorded insert duration");
    }

    fn record_list_elapsed(&self, elapsed: Duration) {
        info!(target: "metrics", elapsed_ms = elapsed.as_millis(), "Recorded list duration");
    }

    fn record_rows_listed(&self, rows: usize) {
        info!(target: "metrics", rows, "Recorded rows listed");
    }
}

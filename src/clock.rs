use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current instant, injected so handlers can be tested with a fixed time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn format_timestamp(instant: DateTime<Utc>, zone: &Tz) -> String {
    instant.with_timezone(zone).format(TIMESTAMP_FORMAT).to_string()
}

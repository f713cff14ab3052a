use crate::{clock::Clock, metrics::Metrics, store::TimeLogStore};
use chrono_tz::Tz;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TimeLogStore + Send + Sync>,
    pub clock: Arc<dyn Clock + Send + Sync>,
    pub metrics: Arc<dyn Metrics + Send + Sync>,
    pub timezone: Tz,
}

use crate::model::TimeRecord;
use std::{future::Future, pin::Pin};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("record {0} already exists")]
    DuplicateId(i64),
    #[error("record {0} is missing")]
    MissingRecord(i64),
}

pub trait TimeLogStore: Send + Sync {
    /// Stores a timestamp and returns it with the identifier assigned by storage.
    fn insert<'a>(
        &'a self,
        timestamp: String,
    ) -> Pin<Box<dyn Future<Output = Result<TimeRecord, StoreError>> + Send + 'a>>;

    /// All records, ascending by identifier.
    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<TimeRecord>, StoreError>> + Send + 'a>>;
}

use super::store_api::{StoreError, TimeLogStore};
use crate::model::TimeRecord;
use scc::HashMap;
use std::{future::Future, pin::Pin};
use tokio::sync::RwLock;
use tracing::trace;

/// In-process store with the same id semantics as an auto-increment column.
#[derive(Debug, Default)]
pub struct MemoryTimeLogStore {
    records: HashMap<i64, String>,
    order: RwLock<Vec<i64>>,
}

impl MemoryTimeLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.order.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.order.read().await.is_empty()
    }
}

impl TimeLogStore for MemoryTimeLogStore {
    fn insert<'a>(
        &'a self,
        timestamp: String,
    ) -> Pin<Box<dyn Future<Output = Result<TimeRecord, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            // Holding the write lock while assigning keeps ids and order in step.
            let mut order = self.order.write().await;
            let id = order.last().map_or(1, |last| last + 1);

            if self.records.insert_async(id, timestamp.clone()).await.is_err() {
                return Err(StoreError::DuplicateId(id));
            }
            order.push(id);
            trace!("Stored record {}", id);

            Ok(TimeRecord { id, timestamp })
        })
    }

    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<TimeRecord>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let order = self.order.read().await;
            let mut rows = Vec::with_capacity(order.len());

            for id in order.iter() {
                let timestamp = self
                    .records
                    .read_async(id, |_, v| v.clone())
                    .await
                    .ok_or(StoreError::MissingRecord(*id))?;
                rows.push(TimeRecord { id: *id, timestamp });
            }

            Ok(rows)
        })
    }
}

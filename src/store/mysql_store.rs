use super::store_api::{StoreError, TimeLogStore};
use crate::{db::schema, model::TimeRecord};
use sqlx::MySqlPool;
use std::{future::Future, pin::Pin};
use tracing::debug;

/// `TimeLogStore` backed by a pooled MySQL connection.
pub struct MySqlTimeLogStore {
    pool: MySqlPool,
}

impl MySqlTimeLogStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl TimeLogStore for MySqlTimeLogStore {
    fn insert<'a>(
        &'a self,
        timestamp: String,
    ) -> Pin<Box<dyn Future<Output = Result<TimeRecord, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let sql = schema::insert_sql();
            let result = sqlx::query(&sql)
                .bind(&timestamp)
                .execute(&self.pool)
                .await?;

            let id = result.last_insert_id() as i64;
            debug!("Inserted {} row {}", schema::TIME_LOG_TABLE, id);

            Ok(TimeRecord { id, timestamp })
        })
    }

    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<TimeRecord>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let sql = schema::select_all_sql();
            let rows = sqlx::query_as::<_, TimeRecord>(&sql)
                .fetch_all(&self.pool)
                .await?;

            Ok(rows)
        })
    }
}

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TimeRecord {
    pub id: i64,
    pub timestamp: String,
}

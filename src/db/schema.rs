//! Declared layout of the `time_log` table and the statements built from it.
use sqlx::MySqlPool;
use tracing::info;

pub const TIME_LOG_TABLE: &str = "time_log";
pub const ID_COLUMN: &str = "id";
pub const TIMESTAMP_COLUMN: &str = "timestamp";

pub fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS `{TIME_LOG_TABLE}` (\
         `{ID_COLUMN}` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         `{TIMESTAMP_COLUMN}` VARCHAR(32) NOT NULL)"
    )
}

pub fn insert_sql() -> String {
    format!("INSERT INTO `{TIME_LOG_TABLE}` (`{TIMESTAMP_COLUMN}`) VALUES (?)")
}

pub fn select_all_sql() -> String {
    format!(
        "SELECT `{ID_COLUMN}`, `{TIMESTAMP_COLUMN}` FROM `{TIME_LOG_TABLE}` ORDER BY `{ID_COLUMN}`"
    )
}

pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(&create_table_sql()).execute(pool).await?;
    info!("Schema ensured for table {}", TIME_LOG_TABLE);
    Ok(())
}

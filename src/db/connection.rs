use crate::config::Config;
use sqlx::{
    Connection, MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use tracing::info;

pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
}

/// Opens the pool and pings one connection so an unreachable database fails startup.
pub async fn connect_db(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    info!(
        "Connecting to MySQL at {}:{}/{}",
        config.db_host, config.db_port, config.db_name
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options(config))
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    info!("Successfully connected to MySQL");
    Ok(pool)
}

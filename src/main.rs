use std::sync::Arc;
use time_log_service::{
    clock::SystemClock,
    config::Config,
    db::{connect_db, ensure_schema},
    logging::init_tracing,
    metrics::LoggingMetrics,
    routes::create_router,
    state::AppState,
    store::MySqlTimeLogStore,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env_file(".env")?;
    init_tracing(&config)?;

    info!(timezone = %config.timezone, "Configuration loaded");

    let pool = connect_db(&config).await?;
    ensure_schema(&pool).await?;

    let app_state = AppState {
        store: Arc::new(MySqlTimeLogStore::new(pool)),
        clock: Arc::new(SystemClock),
        metrics: Arc::new(LoggingMetrics),
        timezone: config.timezone,
    };

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on {}", addr);

    axum::serve(listener, create_router(app_state)).await?;

    Ok(())
}

use crate::config::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured `LOG_LEVEL`.
pub fn init_tracing(config: &Config) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_level.trim()).map_err(|_| {
            ConfigError::Invalid {
                key: "LOG_LEVEL",
                value: config.log_level.clone(),
            }
        })?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

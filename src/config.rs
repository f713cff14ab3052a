use chrono_tz::Tz;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_DB_HOST: &str = "mysql";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Toronto;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("env file error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_max_connections: u32,
    pub timezone: Tz,
    pub http_host: String,
    pub http_port: u16,
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("timezone", &self.timezone)
            .field("http_host", &self.http_host)
            .field("http_port", &self.http_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Loads the env file (if present) and overlays the process environment on top of it.
    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with(path, std::env::vars())
    }

    /// Same as `from_env_file`, with `env` standing in for the process environment.
    pub fn from_env_file_with<I>(path: &str, env: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = load_dotenv(path)?;
        vars.extend(env);
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let db_user = required(vars, "DB_USER")?;
        let db_password = required(vars, "DB_PASSWORD")?;
        let db_name = required(vars, "DB_NAME")?;

        let db_host = optional(vars, "DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let db_port = parsed(vars, "DB_PORT")?.unwrap_or(DEFAULT_DB_PORT);
        let db_max_connections: u32 = parsed(vars, "DB_MAX_CONNECTIONS")?.unwrap_or(10);
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: db_max_connections.to_string(),
            });
        }

        let timezone = match optional(vars, "TIMEZONE") {
            Some(name) => name.parse::<Tz>().map_err(|_| ConfigError::Invalid {
                key: "TIMEZONE",
                value: name,
            })?,
            None => DEFAULT_TIMEZONE,
        };

        let http_host = optional(vars, "HTTP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let http_port = parsed(vars, "HTTP_PORT")?.unwrap_or(80);
        let log_level = optional(vars, "LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
            db_max_connections,
            timezone,
            http_host,
            http_port,
            log_level,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.http_host, self.http_port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "HTTP_HOST",
            value: raw,
        })
    }
}

// Empty values count as unset.
fn optional(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(vars: &HashMap<String, String>, key: &'static str) -> Result<String, ConfigError> {
    optional(vars, key).ok_or(ConfigError::Missing(key))
}

fn parsed<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match optional(vars, key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(None),
    }
}

/// Reads `KEY=VALUE` lines from an env file. A missing file yields no variables.
pub fn load_dotenv(path: &str) -> Result<HashMap<String, String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_dotenv(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut vars: HashMap<String, String> = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), parse_value(value.trim()).to_string());
        }
    }

    vars
}

// Quoted values lose exactly one matching quote pair; unquoted ones lose a trailing ` #` comment.
fn parse_value(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

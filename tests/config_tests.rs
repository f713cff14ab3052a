use std::collections::HashMap;
use std::fs;
use std::io::Write;
use time_log_service::config::{Config, ConfigError, DEFAULT_TIMEZONE, load_dotenv, parse_dotenv};

fn create_temp_env_file(content: &str, file_path: &str) {
    let mut file = fs::File::create(file_path).expect("Failed to create temp env file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp env file");
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn required_vars() -> HashMap<String, String> {
    vars(&[
        ("DB_USER", "app"),
        ("DB_PASSWORD", "secret"),
        ("DB_NAME", "timelog"),
    ])
}

#[test]
fn test_from_env_file_success() {
    let file_path = "test_success.env";
    let content = "
# database
DB_USER=app
DB_PASSWORD=\"s3cret\"
DB_NAME=timelog
DB_HOST=db.internal
    ";

    create_temp_env_file(content, file_path);

    let config = Config::from_env_file_with(file_path, Vec::<(String, String)>::new()).unwrap();

    assert_eq!(config.db_user, "app");
    assert_eq!(config.db_password, "s3cret");
    assert_eq!(config.db_name, "timelog");
    assert_eq!(config.db_host, "db.internal");

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_process_env_wins_over_file() {
    let file_path = "test_env_wins.env";
    let content = "DB_USER=app\nDB_PASSWORD=secret\nDB_NAME=timelog\nDB_HOST=from-file\n";

    create_temp_env_file(content, file_path);

    let env = vec![("DB_HOST".to_string(), "from-env".to_string())];
    let config = Config::from_env_file_with(file_path, env).unwrap();

    assert_eq!(config.db_host, "from-env");
    assert_eq!(config.db_user, "app");

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_missing_env_file_yields_no_vars() {
    let vars = load_dotenv("does_not_exist.env").unwrap();

    assert!(vars.is_empty());
}

#[test]
fn test_unmatched_quote_is_kept() {
    let vars = parse_dotenv("DB_PASSWORD=abc\"\nDB_USER=\"app\nDB_NAME='db'\n");

    assert_eq!(vars["DB_PASSWORD"], "abc\"");
    assert_eq!(vars["DB_USER"], "\"app");
    assert_eq!(vars["DB_NAME"], "db");
}

#[test]
fn test_only_one_quote_pair_removed() {
    let vars = parse_dotenv("DB_PASSWORD=\"\"pa ss\"\"\n");

    assert_eq!(vars["DB_PASSWORD"], "\"pa ss\"");
}

#[test]
fn test_inline_comment_stripped_from_unquoted_value() {
    let vars = parse_dotenv("DB_HOST=h # primary db\nDB_PASSWORD=\"p # not a comment\"\nDB_NAME=a#b\n");

    assert_eq!(vars["DB_HOST"], "h");
    assert_eq!(vars["DB_PASSWORD"], "p # not a comment");
    assert_eq!(vars["DB_NAME"], "a#b");
}

#[test]
fn test_zero_max_connections_rejected() {
    let mut vars = required_vars();
    vars.insert("DB_MAX_CONNECTIONS".to_string(), "0".to_string());

    let result = Config::from_vars(&vars);

    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            ..
        })
    ));
}

#[test]
fn test_from_env_file_unreadable_is_error() {
    // A directory exists but cannot be read as a file.
    let result = Config::from_env_file("tests");

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_defaults_applied() {
    let config = Config::from_vars(&required_vars()).unwrap();

    assert_eq!(config.db_host, "mysql");
    assert_eq!(config.db_port, 3306);
    assert_eq!(config.db_max_connections, 10);
    assert_eq!(config.timezone, DEFAULT_TIMEZONE);
    assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:80");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_missing_required_keys() {
    for key in ["DB_USER", "DB_PASSWORD", "DB_NAME"] {
        let mut vars = required_vars();
        vars.remove(key);

        match Config::from_vars(&vars) {
            Err(ConfigError::Missing(missing)) => assert_eq!(missing, key),
            other => panic!("expected missing {key}, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_required_key_counts_as_missing() {
    let mut vars = required_vars();
    vars.insert("DB_PASSWORD".to_string(), "  ".to_string());

    let result = Config::from_vars(&vars);

    assert!(matches!(result, Err(ConfigError::Missing("DB_PASSWORD"))));
}

#[test]
fn test_invalid_port_rejected() {
    let mut vars = required_vars();
    vars.insert("DB_PORT".to_string(), "not-a-port".to_string());

    let result = Config::from_vars(&vars);

    assert!(matches!(
        result,
        Err(ConfigError::Invalid { key: "DB_PORT", .. })
    ));
}

#[test]
fn test_invalid_timezone_rejected() {
    let mut vars = required_vars();
    vars.insert("TIMEZONE".to_string(), "Mars/Olympus_Mons".to_string());

    let result = Config::from_vars(&vars);

    assert!(matches!(
        result,
        Err(ConfigError::Invalid { key: "TIMEZONE", .. })
    ));
}

#[test]
fn test_overrides_applied() {
    let mut vars = required_vars();
    vars.insert("DB_PORT".to_string(), "3307".to_string());
    vars.insert("TIMEZONE".to_string(), "Europe/Berlin".to_string());
    vars.insert("HTTP_HOST".to_string(), "127.0.0.1".to_string());
    vars.insert("HTTP_PORT".to_string(), "8080".to_string());

    let config = Config::from_vars(&vars).unwrap();

    assert_eq!(config.db_port, 3307);
    assert_eq!(config.timezone, chrono_tz::Europe::Berlin);
    assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn test_debug_hides_password() {
    let config = Config::from_vars(&required_vars()).unwrap();

    let printed = format!("{config:?}");

    assert!(!printed.contains("secret"));
    assert!(printed.contains("***"));
}

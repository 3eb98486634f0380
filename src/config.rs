// src/config.rs

use std::{env, fmt, net::SocketAddr, path::PathBuf};

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub server_addr: SocketAddr,
    pub db_max_connections: u32,
    pub log_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has an invalid value: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let server_addr = parse_or(&lookup, "SERVER_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)))?;

        let db_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;

        let log_dir = lookup("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Ok(Self {
            database_url,
            rust_log,
            server_addr,
            db_max_connections,
            log_dir,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/trivia")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/trivia");
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.server_addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(
            config_from(&[]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/trivia"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/trivia"),
            ("RUST_LOG", "debug"),
            ("SERVER_ADDR", "127.0.0.1:8080"),
            ("LOG_DIR", "/var/log/trivia"),
        ])
        .unwrap();
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.server_addr.port(), 8080);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/trivia"));
    }
}

//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_DB_PATH: &str = "./data/listing-shell.db";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Process-level configuration for the listing shell binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the libSQL file backing the session key-value store.
    pub db_path: PathBuf,
    /// Port the JSON API listens on.
    pub port: u16,
    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from `LISTING_SHELL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = lookup("LISTING_SHELL_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let port = match lookup("LISTING_SHELL_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "LISTING_SHELL_PORT".to_string(),
                    message: format!("{raw:?} is not a valid port: {e}"),
                })?,
            None => defaults.port,
        };

        let log_level = lookup("LISTING_SHELL_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_level);

        Ok(Self {
            db_path,
            port,
            log_level,
        })
    }
}

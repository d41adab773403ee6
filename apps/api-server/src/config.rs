//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use postdesk_infra::DatabaseConfig;

const DEFAULT_PORT: u16 = 5000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = get("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_or(get("DB_MAX_CONNECTIONS"), 10),
                min_connections: parse_or(get("DB_MIN_CONNECTIONS"), 1),
                sync_schema: get("DB_SYNC_SCHEMA")
                    .map(|v| v != "false" && v != "0")
                    .unwrap_or(true),
            });

        Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get("PORT"), DEFAULT_PORT),
            database,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

//! Application settings.
//!
//! Settings come from environment variables, optionally populated from a
//! `.env` file by `main`. Every setting has a default so the service starts
//! with no configuration at all.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use std::net::SocketAddr;
use tracing::debug;

/// Default address the HTTP server listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Default number of transactions shown on the dashboard.
pub const DEFAULT_RECENT_TRANSACTIONS: u64 = 5;

/// Runtime configuration for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SeaORM` connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Socket the HTTP server binds to (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
    /// Dashboard recent-transaction count (`RECENT_TRANSACTIONS`)
    pub recent_transactions: u64,
}

impl AppConfig {
    /// Builds the configuration from a key lookup, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_raw = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_raw.parse().map_err(|e| Error::Config {
            message: format!("BIND_ADDRESS '{bind_raw}' is not a socket address: {e}"),
        })?;

        let recent_transactions = match lookup("RECENT_TRANSACTIONS") {
            Some(raw) => raw.parse().map_err(|e| Error::Config {
                message: format!("RECENT_TRANSACTIONS '{raw}' is not a count: {e}"),
            })?,
            None => DEFAULT_RECENT_TRANSACTIONS,
        };

        Ok(Self {
            database_url,
            bind_address,
            recent_transactions,
        })
    }
}

/// Loads the configuration from the process environment.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| std::env::var(key).ok())?;
    debug!(?config, "Loaded application configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.recent_transactions, 5);
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "0.0.0.0:8080"),
            ("RECENT_TRANSACTIONS", "10"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.recent_transactions, 10);
    }

    #[test]
    fn test_bad_bind_address_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("BIND_ADDRESS", "localhost")]));
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_bad_recent_count_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("RECENT_TRANSACTIONS", "five")]));
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}

//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Contact submissions allowed per client IP within `contact_rate_window`.
    pub contact_rate_limit: usize,
    pub contact_rate_window: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            contact_rate_limit: DEFAULT_CONTACT_RATE_LIMIT,
            contact_rate_window: Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTACT_RATE_LIMIT`: default 5
    /// - `CONTACT_RATE_WINDOW_SECS`: default 600
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let contact_rate_limit = parse_or(&get, "CONTACT_RATE_LIMIT", DEFAULT_CONTACT_RATE_LIMIT).max(1);
        let window_secs = parse_or(&get, "CONTACT_RATE_WINDOW_SECS", DEFAULT_CONTACT_RATE_WINDOW_SECS).max(1);

        Ok(Self { port, contact_rate_limit, contact_rate_window: Duration::from_secs(window_secs) })
    }
}

/// Parse `key`, falling back to `default` when unset or malformed.
pub(crate) fn parse_or<T: std::str::FromStr>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    get(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Unparsable values fall back to the default rather than aborting startup.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,todo_server=debug,todo_core=debug";

/// Errors from configuration values that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not an IP address.
    #[error("Invalid bind host '{host}': expected an IP address")]
    InvalidAddress {
        /// The rejected host value
        host: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging and metrics configuration
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

/// Logging and metrics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `tracing-subscriber` env filter directive
    pub log_filter: String,
    /// Install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var::<u16, _>(&lookup, "PORT").unwrap_or(8000),
                shutdown_timeout: parse_var::<u64, _>(&lookup, "SHUTDOWN_TIMEOUT").unwrap_or(30),
            },
            observability: ObservabilityConfig {
                log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                metrics_enabled: parse_var::<bool, _>(&lookup, "METRICS_ENABLED").unwrap_or(true),
            },
        }
    }

    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.server.host.clone(),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

/// Look up `key` and parse it, treating unparsable values as unset.
fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|value| value.trim().parse().ok())
}

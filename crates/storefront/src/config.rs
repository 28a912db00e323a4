//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PORT` - Listen port
//!
//! ## Optional
//! - `PIZZERIA_HOST` - Bind address (default: 0.0.0.0)
//! - `PIZZERIA_DATA_FILE` - Pizza catalog file (default: ./data/pizzas.json)
//! - `PIZZERIA_STATIC_DIR` - Front-end build output (default: ./build)
//! - `PIZZERIA_CART_TTL_SECS` - Cart inactivity window in seconds (default: 1800)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default cart inactivity window: 30 minutes.
pub const DEFAULT_CART_TTL_SECS: u64 = 30 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// JSON file holding the pizza catalog
    pub data_file: PathBuf,
    /// Directory with the built front-end (`index.html` and assets)
    pub static_dir: PathBuf,
    /// Idle time after which the shared cart is emptied
    pub cart_ttl: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` is missing or any variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let port = parse_var("PORT", &get_required_env("PORT")?)?;
        let host = parse_var(
            "PIZZERIA_HOST",
            &get_env_or_default("PIZZERIA_HOST", "0.0.0.0"),
        )?;
        let data_file = PathBuf::from(get_env_or_default(
            "PIZZERIA_DATA_FILE",
            "./data/pizzas.json",
        ));
        let static_dir = PathBuf::from(get_env_or_default("PIZZERIA_STATIC_DIR", "./build"));
        let cart_ttl_secs: u64 = parse_var(
            "PIZZERIA_CART_TTL_SECS",
            &get_env_or_default("PIZZERIA_CART_TTL_SECS", &DEFAULT_CART_TTL_SECS.to_string()),
        )?;
        if cart_ttl_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "PIZZERIA_CART_TTL_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            data_file,
            static_dir,
            cart_ttl: Duration::from_secs(cart_ttl_secs),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the front-end entry point served at `/`.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a variable's raw value, naming the variable on failure.
fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

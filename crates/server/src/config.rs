//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MATCHDAY_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to the generic `DATABASE_URL`)
//!
//! ## Optional
//! - `MATCHDAY_HOST` - Bind address (default: 127.0.0.1)
//! - `MATCHDAY_PORT` - Listen port (default: 3000)
//! - `MATCHDAY_SESSION_EXPIRY_SECONDS` - Admin session inactivity expiry
//!   (default: 7 days)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default session inactivity expiry (7 days).
const DEFAULT_SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Admin session inactivity expiry in seconds
    pub session_expiry_seconds: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("MATCHDAY_DATABASE_URL")?;
        let host = get_env_or_default("MATCHDAY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MATCHDAY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MATCHDAY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MATCHDAY_PORT".to_string(), e.to_string()))?;
        let session_expiry_seconds = get_env_or_default(
            "MATCHDAY_SESSION_EXPIRY_SECONDS",
            &DEFAULT_SESSION_EXPIRY_SECONDS.to_string(),
        )
        .parse::<i64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("MATCHDAY_SESSION_EXPIRY_SECONDS".to_string(), e.to_string())
        })?;

        Ok(Self {
            database_url,
            host,
            port,
            session_expiry_seconds,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DATABASE_URL` - MongoDB connection string (default: mongodb://localhost:27017)
//! - `DATABASE_NAME` - database name (default: premium_shoes)
//! - `PORT` - listen port (default: 8000)
//!
//! The connection string is handed to the driver unparsed; the diagnostic
//! endpoint only ever reports whether the variables are set.

use std::env;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "premium_shoes";
const DEFAULT_PORT: u16 = 8000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Document store connection string.
    pub database_url: String,
    /// Document store database name.
    pub database_name: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".into(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.into()),
            port,
        })
    }
}

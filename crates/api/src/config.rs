//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the shift calendar API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://shifts.db")
//! - `DATABASE_MAX_CONNECTIONS`: Size of the connection pool (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shifts.db";

/// Configuration for the shift calendar API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use shiftcal_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// SQLite database connection string
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 5,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The DATABASE_MAX_CONNECTIONS value cannot be parsed as a u32
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        // Network settings
        let host = env::var("API_HOST").unwrap_or(defaults.host);
        let port = match env::var("API_PORT") {
            Ok(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            Err(_) => defaults.port,
        };

        // Database settings
        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .wrap_err("Invalid DATABASE_MAX_CONNECTIONS value")?,
            Err(_) => defaults.database_max_connections,
        };

        // Logging settings
        let log_level = env::var("LOG_LEVEL")
            .map(|level| parse_log_level(&level))
            .unwrap_or(defaults.log_level);

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| parse_origins(&origins))
            .filter(|origins| !origins.is_empty());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.request_timeout);

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a level name to a tracing level; unknown names fall back to INFO.
pub fn parse_log_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

//! # API Configuration Module
//!
//! Loads the server and database settings once at start-up. Values come from
//! environment variables (a `.env` file is honoured by the binary) and fall
//! back to defaults suitable for a local PostgreSQL.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: address to bind (default: "0.0.0.0")
//! - `PORT`: port to listen on (default: 3000)
//! - `DATABASE_URL`: full connection string; overrides the `DB_*` variables
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_DATABASE`: connection
//!   parts (defaults: localhost, 5432, postgres, none, doctor)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)
//! - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated allowed origins; any origin when unset

use eyre::{Result, WrapErr};
use sqlx::postgres::PgConnectOptions;
use std::{env, str::FromStr};
use tracing::Level;

/// Configuration for the API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use clinic_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Where and how to reach PostgreSQL
    pub database: DatabaseConfig,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins; `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
}

/// Connection settings for the PostgreSQL pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Builds connection options, preferring the full URL when one was given.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).wrap_err("Invalid DATABASE_URL value");
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Fails when a numeric setting (`PORT`, `DB_PORT`, `DB_MAX_CONNECTIONS`)
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new ApiConfig from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var("API_HOST", "0.0.0.0");
        let port = parse_var(&lookup, "PORT", 3000)?;

        // Database settings
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL"),
            host: var("DB_HOST", "localhost"),
            port: parse_var(&lookup, "DB_PORT", 5432)?,
            user: var("DB_USER", "postgres"),
            password: lookup("DB_PASSWORD"),
            name: var("DB_DATABASE", "doctor"),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        };

        // Logging settings
        let log_level = match var("LOG_LEVEL", "info").to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Ok(Self {
            host,
            port,
            database,
            log_level,
            cors_origins,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {key} value: {raw:?}")),
        None => Ok(default),
    }
}

//! Configuration management for users-api
//!
//! Built-in defaults overlaid with `USERS_API__*` environment variables.
//! `DATABASE_URL` wins over `USERS_API__DATABASE__URL` when both are set.

use crate::types::StartupError;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment};
use serde::Deserialize;
use std::env;
use std::time::Duration;

const ENV_PREFIX: &str = "USERS_API";

/// Complete app configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: usize,
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Load the complete app configuration from the process environment
pub fn load_config() -> Result<AppConfig, StartupError> {
    let builder = defaults()?
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
        .set_override_option("database.url", env::var("DATABASE_URL").ok())?;

    build(builder)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, StartupError> {
    Ok(Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3333_i64)?
        .set_default("database.url", "postgresql://localhost/users_api")?
        .set_default("database.max_connections", 16_i64)?
        .set_default("database.connect_timeout_secs", 5_i64)?)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, StartupError> {
    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), StartupError> {
    if config.database.url.trim().is_empty() {
        return Err(StartupError::Config("Database URL can't be empty".to_string()));
    }

    if config.database.max_connections == 0 {
        return Err(StartupError::Config("Pool needs at least one connection".to_string()));
    }

    Ok(())
}

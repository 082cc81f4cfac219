//! Shared error types for process startup

use thiserror::Error;

/// Application startup errors
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database pool error: {0}")]
    Database(String),
    #[error("Server binding error: {0}")]
    ServerBind(#[from] std::io::Error),
}

impl From<config::ConfigError> for StartupError {
    fn from(error: config::ConfigError) -> Self {
        StartupError::Config(error.to_string())
    }
}

impl From<deadpool_postgres::CreatePoolError> for StartupError {
    fn from(error: deadpool_postgres::CreatePoolError) -> Self {
        StartupError::Database(error.to_string())
    }
}

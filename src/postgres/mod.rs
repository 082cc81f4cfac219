//! PostgreSQL support

pub mod config;

pub use config::create_pool;

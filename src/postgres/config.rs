//! PostgreSQL connection pool configuration and setup

use crate::config::DatabaseConfig;
use crate::types::StartupError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

/// Creates a PostgreSQL connection pool from the database settings.
///
/// Connections are opened lazily, so an unreachable server only surfaces on
/// the first query.
pub fn create_pool(settings: &DatabaseConfig) -> Result<Pool, StartupError> {
    let mut cfg = Config::new();
    cfg.url = Some(settings.url.clone());
    cfg.connect_timeout = Some(settings.connect_timeout());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(settings.max_connections));

    Ok(cfg.create_pool(Some(Runtime::Tokio1), NoTls)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 4,
            connect_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_create_pool_is_lazy() {
        let pool = create_pool(&settings("postgresql://nobody@localhost:1/none")).unwrap();
        assert_eq!(pool.status().max_size, 4);
    }

    #[tokio::test]
    async fn test_create_pool_rejects_bad_url() {
        assert!(matches!(create_pool(&settings("not a url ::")), Err(StartupError::Database(_))));
    }
}

//! User Repository Module
//!
//! Persistence interface for user records and its PostgreSQL implementation.

use super::model::{NewUser, User};
use crate::user::error::UserError;
use async_trait::async_trait;
use deadpool_postgres::Pool;
use uuid::Uuid;

const INSERT_USER: &str = r#"
    INSERT INTO users (id, email, name, phone_number, token, password)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, email, name, phone_number, token, password
"#;

const SELECT_USERS: &str = r#"
    SELECT id, email, name, phone_number, token, password
    FROM users
"#;

/// Repository trait defining operations for user data persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under a freshly generated id and returns the stored record
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Returns every stored user, in storage order
    async fn list(&self) -> Result<Vec<User>, UserError>;

    /// Checks that the storage answers
    async fn ping(&self) -> Result<(), UserError>;
}

/// PostgreSQL implementation of the UserRepository
pub struct PgUserRepository {
    pool: Pool,
}

impl PgUserRepository {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let client = self.pool.get().await?;
        let id = Uuid::new_v4();

        let row = client
            .query_one(
                INSERT_USER,
                &[
                    &id,
                    &new_user.email,
                    &new_user.name,
                    &new_user.phone_number,
                    &new_user.token,
                    &new_user.password,
                ],
            )
            .await?;

        User::try_from(&row).map_err(|e| UserError::RowMapping(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let client = self.pool.get().await?;
        let rows = client.query(SELECT_USERS, &[]).await?;

        rows.iter()
            .map(|row| User::try_from(row).map_err(|e| UserError::RowMapping(e.to_string())))
            .collect()
    }

    async fn ping(&self) -> Result<(), UserError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}

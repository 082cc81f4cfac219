//! User domain models
//!
//! Records as they are stored in and read back from the `users` table.

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use uuid::Uuid;

use crate::user::dto::CreateUserRequest;

/// Phone number assigned to every new user.
pub const DEFAULT_PHONE_NUMBER: &str = "31999999999";

/// Token assigned to every new user.
pub const DEFAULT_TOKEN: &str = "fake-token-123";

/// Password assigned to every new user. Stored and returned in plaintext.
pub const DEFAULT_PASSWORD: &str = "123456";

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub token: String,
    pub password: String,
}

impl User {
    /// Attach a freshly generated identifier to an insert payload
    pub fn from_new(id: Uuid, new_user: NewUser) -> Self {
        Self {
            id,
            email: new_user.email,
            name: new_user.name,
            phone_number: new_user.phone_number,
            token: new_user.token,
            password: new_user.password,
        }
    }
}

impl TryFrom<&Row> for User {
    type Error = tokio_postgres::Error;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            phone_number: row.try_get("phone_number")?,
            token: row.try_get("token")?,
            password: row.try_get("password")?,
        })
    }
}

/// Insert payload: everything but the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub token: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            name: request.name,
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

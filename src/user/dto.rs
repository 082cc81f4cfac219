//! User Data Transfer Objects

use serde::{Deserialize, Serialize};

/// Body of `POST /users`. Fields are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

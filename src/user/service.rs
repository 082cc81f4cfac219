//! User Service Module
//!
//! Maps incoming user requests onto repository calls.

use crate::user::{
    dto::CreateUserRequest,
    error::UserError,
    model::{NewUser, User},
    repository::UserRepository,
};
use std::sync::Arc;

/// Service for managing user-related operations
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
        }
    }

    /// Creates a user from the caller's email and name.
    ///
    /// Phone number, token and password are filled with fixed values.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserError> {
        self.repo.create(NewUser::from(request)).await
    }

    /// Lists every stored user, unfiltered
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repo.list().await
    }

    /// Checks that the backing storage is reachable
    pub async fn check_storage(&self) -> Result<(), UserError> {
        self.repo.ping().await
    }
}

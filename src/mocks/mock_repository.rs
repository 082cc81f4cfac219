use crate::user::error::UserError;
use crate::user::model::{NewUser, User};
use crate::user::repository::UserRepository;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory user store for tests and the mock server.
///
/// Clones share the same records, so a test can keep a handle while the app
/// owns another.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    fail_inserts: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose inserts always fail
    pub fn with_failing_inserts() -> Self {
        let repo = Self::new();
        repo.set_fail_inserts(true);
        repo
    }

    /// A repository whose reads and pings always fail
    pub fn with_failing_reads() -> Self {
        let repo = Self::new();
        repo.set_fail_reads(true);
        repo
    }

    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(UserError::Database("simulated insert failure".to_string()));
        }

        let user = User::from_new(Uuid::new_v4(), new_user);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(UserError::Pool("simulated connection failure".to_string()));
        }

        Ok(self.users.read().await.clone())
    }

    async fn ping(&self) -> Result<(), UserError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(UserError::Pool("simulated connection failure".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::dto::CreateUserRequest;

    fn new_user(email: &str) -> NewUser {
        NewUser::from(CreateUserRequest {
            email: email.to_string(),
            name: "Test".to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(new_user("one@example.com")).await.unwrap();
        let second = repo.create(new_user("two@example.com")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_failing_insert_stores_nothing() {
        let repo = InMemoryUserRepository::with_failing_inserts();
        let result = repo.create(new_user("fail@example.com")).await;

        assert!(matches!(result, Err(UserError::Database(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let repo = InMemoryUserRepository::new();
        let handle = repo.clone();
        repo.create(new_user("shared@example.com")).await.unwrap();

        let users = handle.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "shared@example.com");
    }

    #[tokio::test]
    async fn test_failing_reads() {
        let repo = InMemoryUserRepository::with_failing_reads();
        assert!(repo.list().await.is_err());
        assert!(repo.ping().await.is_err());
    }
}

//! In-memory UserRepository for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{NewUser, User};
use crate::ports::{RepositoryError, UserRepository};

/// In-memory implementation of the UserRepository port.
///
/// Mirrors the store's uniqueness behavior: inserting a duplicate email
/// fails the same way the database constraint would.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail_next: Mutex<Option<RepositoryError>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user directly, bypassing the port (test seeding).
    pub async fn seed(&self, user: NewUser) -> User {
        let stored = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            billing_customer_id: user.billing_customer_id,
        };
        self.users.lock().unwrap().push(stored.clone());
        stored
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make the next repository call fail with the given error.
    pub fn set_error(&self, error: RepositoryError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    fn take_error(&self) -> Option<RepositoryError> {
        self.fail_next.lock().unwrap().take()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::DuplicateEmail);
        }

        let stored = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            billing_customer_id: user.billing_customer_id,
        };
        users.push(stored.clone());
        Ok(stored)
    }
}

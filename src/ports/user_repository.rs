//! Credential store port.
//!
//! The persistent user collection is an external collaborator; this trait is
//! its interface boundary. Lookup is by email (the natural key), insertion
//! assigns the store id.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{NewUser, User};

/// Port for the persistent user collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist a new user, returning the stored record with its assigned id.
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;
}

/// Errors from the credential store.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The store's uniqueness constraint rejected the email. This is the
    /// backstop for the non-transactional check-then-create flow: two
    /// concurrent signups can both pass the lookup, but only one insert wins.
    #[error("email already exists")]
    DuplicateEmail,

    /// Query or connection failure.
    #[error("database error: {0}")]
    Database(String),
}

impl RepositoryError {
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database(message.into())
    }
}

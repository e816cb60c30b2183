//! CurrentUserHandler - query handler for the "who am I" lookup.

use std::sync::Arc;

use crate::domain::user::{AuthFlowError, User};
use crate::ports::UserRepository;

/// Query for the record behind a verified token subject.
#[derive(Debug, Clone)]
pub struct CurrentUserQuery {
    /// Email verified by the authorization gate.
    pub email: String,
}

/// Handler resolving a token subject to its user record.
pub struct CurrentUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CurrentUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: CurrentUserQuery) -> Result<User, AuthFlowError> {
        // A valid token can outlive its account (no revocation list), so the
        // lookup can legitimately come up empty.
        self.users
            .find_by_email(&query.email)
            .await
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?
            .ok_or(AuthFlowError::UserNotFound)
    }
}

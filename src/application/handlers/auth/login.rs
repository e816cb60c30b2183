//! LoginHandler - command handler for credential verification.

use std::sync::Arc;

use crate::adapters::auth::PasswordHasher;
use crate::domain::user::{AuthFlowError, User};
use crate::ports::{TokenCodec, UserRepository};

/// Command to authenticate with email and password.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Handler for the login flow.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    hasher: PasswordHasher,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenCodec>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthFlowError> {
        // Unknown email and wrong password must be indistinguishable to the
        // caller, so both collapse to InvalidCredentials.
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?
            .ok_or(AuthFlowError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, &user.password_hash) {
            tracing::debug!(email = %cmd.email, "Password mismatch on login");
            return Err(AuthFlowError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.email)
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?;

        Ok(LoginResult { token, user })
    }
}

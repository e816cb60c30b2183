//! SignupHandler - command handler for account creation.

use std::sync::Arc;

use crate::adapters::auth::PasswordHasher;
use crate::domain::user::{validate_signup, AuthFlowError, NewUser, User};
use crate::ports::{PaymentProvider, RepositoryError, TokenCodec, UserRepository};

/// Command to create an account.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub password: String,
}

/// Result of a successful signup.
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub token: String,
    pub user: User,
}

/// Handler for the signup flow.
///
/// Ordering is load-bearing: the billing customer is created before the user
/// is persisted, and any failure aborts the remaining steps, so no user ever
/// exists without a billing customer id.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    payments: Arc<dyn PaymentProvider>,
    tokens: Arc<dyn TokenCodec>,
    hasher: PasswordHasher,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        payments: Arc<dyn PaymentProvider>,
        tokens: Arc<dyn TokenCodec>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            payments,
            tokens,
            hasher,
        }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<SignupResult, AuthFlowError> {
        // 1. Validate input, reporting every failure at once.
        let messages = validate_signup(&cmd.email, &cmd.password);
        if !messages.is_empty() {
            return Err(AuthFlowError::validation(messages));
        }

        // 2. Uniqueness check. Not transactional with the insert below; the
        //    store's unique constraint is the backstop for the race.
        let existing = self
            .users
            .find_by_email(&cmd.email)
            .await
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?;
        if existing.is_some() {
            return Err(AuthFlowError::EmailInUse);
        }

        // 3. Hash the password.
        let password_hash = self.hasher.hash(&cmd.password)?;

        // 4. Create the billing customer. Hard dependency: on failure the
        //    signup fails and nothing is persisted.
        let customer = self
            .payments
            .create_customer(&cmd.email)
            .await
            .map_err(|e| {
                tracing::warn!(email = %cmd.email, error = %e, "Billing customer creation failed");
                AuthFlowError::payment_failed(e.to_string())
            })?;

        // 5. Persist the user.
        let user = self
            .users
            .insert(NewUser {
                email: cmd.email.clone(),
                password_hash,
                billing_customer_id: customer.id,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateEmail => AuthFlowError::EmailInUse,
                other => AuthFlowError::infrastructure(other.to_string()),
            })?;

        // 6. Issue the session token.
        let token = self
            .tokens
            .issue(&user.email)
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?;

        tracing::info!(email = %user.email, "User signed up");

        Ok(SignupResult { token, user })
    }
}

//! CreateCheckoutHandler - command handler for subscription checkout sessions.

use std::sync::Arc;

use crate::domain::user::AuthFlowError;
use crate::ports::{CreateCheckoutRequest, PaymentProvider, UserRepository};

/// Command to open a subscription checkout session.
#[derive(Debug, Clone)]
pub struct CreateCheckoutCommand {
    /// Email verified by the authorization gate.
    pub email: String,

    /// Processor price the subscription is for.
    pub price_id: String,

    /// Redirect target after a completed checkout.
    pub success_url: String,

    /// Redirect target after an abandoned checkout.
    pub cancel_url: String,
}

/// Handler for checkout-session creation.
pub struct CreateCheckoutHandler {
    users: Arc<dyn UserRepository>,
    payments: Arc<dyn PaymentProvider>,
}

impl CreateCheckoutHandler {
    pub fn new(users: Arc<dyn UserRepository>, payments: Arc<dyn PaymentProvider>) -> Self {
        Self { users, payments }
    }

    pub async fn handle(
        &self,
        cmd: CreateCheckoutCommand,
    ) -> Result<serde_json::Value, AuthFlowError> {
        // A stale token can reference an account that no longer exists;
        // that is a not-found outcome, never a crash.
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await
            .map_err(|e| AuthFlowError::infrastructure(e.to_string()))?
            .ok_or(AuthFlowError::UserNotFound)?;

        self.payments
            .create_checkout_session(CreateCheckoutRequest {
                customer_id: user.billing_customer_id,
                price_id: cmd.price_id,
                success_url: cmd.success_url,
                cancel_url: cmd.cancel_url,
            })
            .await
            .map_err(|e| {
                tracing::warn!(email = %cmd.email, error = %e, "Checkout session creation failed");
                AuthFlowError::payment_failed(e.to_string())
            })
    }
}

//! Payment provider port for external payment processing.
//!
//! Defines the contract for the billing gateway (Stripe in production).
//! Customer creation is typed because the returned id is persisted; price
//! listing and checkout-session creation are passthrough because the API
//! contract returns the processor's objects unmodified.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a customer record for the given email.
    ///
    /// Called once per signup; the returned id is stored on the user and
    /// never changes afterwards.
    async fn create_customer(&self, email: &str) -> Result<Customer, PaymentError>;

    /// List the processor's prices, unmodified.
    async fn list_prices(&self) -> Result<serde_json::Value, PaymentError>;

    /// Create a hosted checkout session in subscription mode.
    ///
    /// Returns the processor's session object unmodified, including the
    /// redirect URL the client follows.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<serde_json::Value, PaymentError>;
}

/// Customer record in the payment system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Provider's customer id (e.g. `cus_...`).
    pub id: String,

    /// Customer email.
    pub email: String,
}

/// Request to create a subscription checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutRequest {
    /// Provider's customer id the session is bound to.
    pub customer_id: String,

    /// Price the single line item references.
    pub price_id: String,

    /// URL to redirect after successful checkout.
    pub success_url: String,

    /// URL to redirect after canceled checkout.
    pub cancel_url: String,
}

/// Errors from the payment provider.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// Transport-level failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned a non-success response.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider's response could not be parsed.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl PaymentError {
    pub fn network(message: impl Into<String>) -> Self {
        PaymentError::Network(message.into())
    }

    pub fn provider(message: impl Into<String>) -> Self {
        PaymentError::Provider(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        PaymentError::InvalidResponse(message.into())
    }
}

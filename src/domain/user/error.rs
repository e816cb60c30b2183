//! Error taxonomy for the auth and billing flows.

use thiserror::Error;

/// Errors surfaced by the signup, login, lookup, and billing flows.
///
/// Variants map one-to-one onto the HTTP error contract: validation and
/// credential failures are 400, missing users are 404, upstream and
/// infrastructure failures are 500 with the real cause logged server-side.
#[derive(Debug, Clone, Error)]
pub enum AuthFlowError {
    /// One or more input validation failures, all reported at once.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    /// Signup attempted with an email that already has an account.
    #[error("Email already in use")]
    EmailInUse,

    /// Login failed. Deliberately identical for unknown email and wrong
    /// password so account existence does not leak.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token subject (or checkout requester) has no matching user record.
    #[error("User not found")]
    UserNotFound,

    /// The payment processor call failed; the whole request fails with it.
    #[error("payment provider failure: {0}")]
    PaymentFailed(String),

    /// Credential store or other infrastructure failure.
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl AuthFlowError {
    /// Builds a validation error from accumulated messages.
    pub fn validation(messages: Vec<String>) -> Self {
        AuthFlowError::Validation(messages)
    }

    pub fn payment_failed(message: impl Into<String>) -> Self {
        AuthFlowError::PaymentFailed(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AuthFlowError::Infrastructure(message.into())
    }
}

//! Authentication types for the domain layer.
//!
//! These types represent an authenticated identity extracted from a session
//! token. They have no codec dependencies - the token adapter populates them
//! via the `TokenCodec` port.

use thiserror::Error;

/// Authenticated identity extracted from a validated session token.
///
/// The subject of a session token is the user's email; that is the only
/// claim the application consumes downstream of the authorization gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Email address carried as the token subject.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user from a verified token subject.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during token issuance or validation.
///
/// The HTTP boundary collapses every verification failure into a single
/// "unauthorized" outcome; these variants exist for logging and tests.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The signing key is unusable (fatal misconfiguration, not user-facing).
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

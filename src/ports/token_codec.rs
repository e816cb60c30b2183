//! Session token codec port.
//!
//! Keeping issuance and verification behind a trait keeps the authorization
//! middleware codec-agnostic: the JWT adapter, or a test stub, can stand
//! behind it without the middleware changing.

use crate::domain::foundation::AuthError;

/// Port for the signed, time-bounded session token.
///
/// The subject of every token is a user email; the server stays stateless
/// with respect to issued tokens (no revocation list).
pub trait TokenCodec: Send + Sync {
    /// Produce a signed token for the given subject.
    ///
    /// Fails only on signing-key misconfiguration.
    fn issue(&self, email: &str) -> Result<String, AuthError>;

    /// Verify a token and return its subject.
    ///
    /// Malformed, forged, and expired tokens all fail; callers at the HTTP
    /// boundary collapse every failure into one "unauthorized" outcome.
    fn verify(&self, token: &str) -> Result<String, AuthError>;
}

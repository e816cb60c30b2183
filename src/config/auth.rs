//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Minimum accepted signing secret length in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Authentication configuration (JWT session tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: SecretString,

    /// Session token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.jwt_secret.expose_secret().len() < MIN_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.token_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

/// Token lifetime matching the legacy API: 360 000 seconds (100 hours).
fn default_token_ttl() -> u64 {
    360_000
}

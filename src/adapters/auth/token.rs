//! HS256 session token codec.
//!
//! Tokens are compact JWTs carrying `{sub: email, iat, exp}`. The lifetime
//! is counted in seconds from issuance; the server keeps no record of issued
//! tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::AuthError;
use crate::ports::TokenCodec;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user's email.
    sub: String,
    /// Issued-at, seconds since epoch.
    iat: i64,
    /// Expiry, seconds since epoch.
    exp: i64,
}

/// Signs and verifies session tokens with an HMAC-SHA256 key.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtTokenCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_secret(config.jwt_secret.expose_secret(), config.token_ttl_secs)
    }

    /// Creates a codec from a raw secret and TTL in seconds.
    pub fn with_secret(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::default();
        // Expired means expired: no grace window on the session lifetime.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: ttl_secs as i64,
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!(error = %e, "Session token rejected");
                        AuthError::InvalidToken
                    }
                }
            })?;

        Ok(data.claims.sub)
    }
}

//! User entity and signup validation.

mod error;
mod validate;

pub use error::AuthFlowError;
pub use validate::{is_valid_email, validate_signup, MIN_PASSWORD_LEN};

use uuid::Uuid;

/// A registered account.
///
/// Created only via signup, after the billing customer exists; read by login
/// and "me" lookups. The core never updates or deletes users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier assigned by the credential store at creation.
    pub id: Uuid,

    /// Unique lookup key and token subject. Stored case-sensitively.
    pub email: String,

    /// One-way password hash. Never the plaintext.
    pub password_hash: String,

    /// Billing customer reference, set at creation and immutable after.
    pub billing_customer_id: String,
}

/// A user pending persistence: everything but the store-assigned id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub billing_customer_id: String,
}

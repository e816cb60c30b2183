//! Foundation types shared across domain modules.

mod auth;

pub use auth::{AuthError, AuthenticatedUser};

//! Credential primitives: password hashing and the session token codec.

mod password;
mod token;

pub use password::PasswordHasher;
pub use token::JwtTokenCodec;

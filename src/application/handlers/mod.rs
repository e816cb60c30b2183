//! Application command/query handlers.

pub mod auth;
pub mod billing;

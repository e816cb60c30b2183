//! Subhub - subscription backend.
//!
//! Email/password signup and login with bearer-token sessions, and
//! subscription checkout against Stripe.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

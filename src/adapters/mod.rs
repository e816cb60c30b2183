//! Adapters: concrete implementations behind the ports, plus the HTTP surface.

pub mod auth;
pub mod http;
pub mod postgres;
pub mod stripe;

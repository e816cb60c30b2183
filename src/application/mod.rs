//! Application layer: orchestration of ports behind explicit handlers.

pub mod handlers;

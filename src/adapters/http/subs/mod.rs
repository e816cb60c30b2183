//! HTTP adapter for the subscription endpoints.

pub mod dto;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::middleware::{auth_middleware, GateState};
use super::AppState;

/// Create the subscriptions router. Every route is gated.
///
/// # Routes
/// - `GET /prices` - processor price list, unmodified
/// - `POST /session` - open a subscription checkout session
pub fn subs_routes(gate: GateState) -> Router<AppState> {
    Router::new()
        .route("/prices", get(handlers::prices))
        .route("/session", post(handlers::session))
        .route_layer(middleware::from_fn_with_state(gate, auth_middleware))
}

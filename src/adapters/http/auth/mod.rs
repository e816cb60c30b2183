//! HTTP adapter for the auth endpoints.

pub mod dto;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::middleware::{auth_middleware, GateState};
use super::AppState;

/// Create the auth router.
///
/// # Routes
/// - `POST /signup` - create an account (public)
/// - `POST /login` - exchange credentials for a token (public)
/// - `GET /me` - resolve the bearer token to its account (gated)
pub fn auth_routes(gate: GateState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(gate, auth_middleware));

    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .merge(protected)
}

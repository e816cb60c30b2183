//! HTTP adapters - REST API implementation.

pub mod auth;
pub mod envelope;
pub mod middleware;
pub mod subs;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::auth::PasswordHasher;
use crate::application::handlers::auth::{CurrentUserHandler, LoginHandler, SignupHandler};
use crate::application::handlers::billing::{CreateCheckoutHandler, ListPricesHandler};
use crate::config::PaymentConfig;
use crate::ports::{PaymentProvider, TokenCodec, UserRepository};

/// Shared application state containing all dependencies.
///
/// Constructed once at startup, immutable afterwards, and cloned per
/// request; Arc-wrapped ports make the clone cheap.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub payments: Arc<dyn PaymentProvider>,
    pub tokens: Arc<dyn TokenCodec>,
    pub hasher: PasswordHasher,
    pub checkout_success_url: String,
    pub checkout_cancel_url: String,
}

impl AppState {
    /// Assemble state from ports and the payment configuration.
    pub fn new(
        users: Arc<dyn UserRepository>,
        payments: Arc<dyn PaymentProvider>,
        tokens: Arc<dyn TokenCodec>,
        payment_config: &PaymentConfig,
    ) -> Self {
        Self {
            users,
            payments,
            tokens,
            hasher: PasswordHasher::new(),
            checkout_success_url: payment_config.checkout_success_url.clone(),
            checkout_cancel_url: payment_config.checkout_cancel_url.clone(),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn signup_handler(&self) -> SignupHandler {
        SignupHandler::new(
            self.users.clone(),
            self.payments.clone(),
            self.tokens.clone(),
            self.hasher.clone(),
        )
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.users.clone(), self.tokens.clone(), self.hasher.clone())
    }

    pub fn current_user_handler(&self) -> CurrentUserHandler {
        CurrentUserHandler::new(self.users.clone())
    }

    pub fn list_prices_handler(&self) -> ListPricesHandler {
        ListPricesHandler::new(self.payments.clone())
    }

    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(self.users.clone(), self.payments.clone())
    }
}

async fn hello() -> &'static str {
    "Hello, World!"
}

/// Assemble the complete application router.
///
/// `/auth/signup` and `/auth/login` are public; `/auth/me` and everything
/// under `/subs` sit behind the authorization gate. CORS is permissive and
/// every request is traced.
pub fn app_router(state: AppState) -> Router {
    let gate: middleware::GateState = state.tokens.clone();

    Router::new()
        .route("/", get(hello))
        .nest("/auth", auth::auth_routes(gate.clone()))
        .nest("/subs", subs::subs_routes(gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

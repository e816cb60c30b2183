//! HTTP handlers for the subscription endpoints.
//!
//! Both handlers sit behind the authorization gate and return the payment
//! processor's objects unmodified. Upstream failures still map to the
//! standard envelope instead of crashing the request.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::super::envelope::{ApiError, ApiJson};
use super::super::middleware::CurrentUser;
use super::super::AppState;
use super::dto::SessionRequest;
use crate::application::handlers::billing::CreateCheckoutCommand;

/// GET /subs/prices
pub async fn prices(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handler = state.list_prices_handler();
    let prices = handler.handle().await?;
    Ok(Json(prices))
}

/// POST /subs/session
pub async fn session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(request): ApiJson<SessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.create_checkout_handler();
    let session = handler
        .handle(CreateCheckoutCommand {
            email: user.email,
            price_id: request.price_id,
            success_url: state.checkout_success_url.clone(),
            cancel_url: state.checkout_cancel_url.clone(),
        })
        .await?;

    Ok(Json(session))
}

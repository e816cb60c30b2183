//! HTTP handlers for the auth endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::super::envelope::{ApiError, ApiJson, Envelope};
use super::super::middleware::CurrentUser;
use super::super::AppState;
use super::dto::{
    LoginData, LoginRequest, MeData, SignupData, SignupRequest, UserSummary, UserWithBilling,
};
use crate::application::handlers::auth::{CurrentUserQuery, LoginCommand, SignupCommand};

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.signup_handler();
    let result = handler
        .handle(SignupCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(Envelope::ok(SignupData {
        token: result.token,
        user: UserWithBilling::from(&result.user),
    })))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.login_handler();
    let result = handler
        .handle(LoginCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(Envelope::ok(LoginData {
        token: result.token,
        user: UserSummary::from(&result.user),
    })))
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.current_user_handler();
    let record = handler
        .handle(CurrentUserQuery { email: user.email })
        .await?;

    Ok(Json(Envelope::ok(MeData {
        user: UserWithBilling::from(&record),
    })))
}

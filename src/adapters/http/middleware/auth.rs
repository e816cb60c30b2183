//! Authorization gate for protected routes.
//!
//! Reads the `Authorization` header as `<scheme> <token>`, verifies the
//! token through the `TokenCodec` port, and either injects the verified
//! identity into request extensions or short-circuits with 403. Every
//! failure, whatever its root cause, produces the same response body so
//! nothing about the token leaks to the caller.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::super::envelope::unauthorized_response;
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::TokenCodec;

/// Gate middleware state: the token codec.
pub type GateState = Arc<dyn TokenCodec>;

/// Authorization middleware validating bearer tokens.
///
/// On success, inserts [`AuthenticatedUser`] into request extensions and
/// lets the request proceed. On any failure - missing header, missing token
/// segment, malformed, forged, or expired token - responds 403 with
/// `{"errors":[{"msg":"unauthorized"}],"data":null}` and runs nothing
/// downstream.
pub async fn auth_middleware(
    State(codec): State<GateState>,
    mut request: Request,
    next: Next,
) -> Response {
    // The scheme word is discarded; only the second segment is the token.
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split_whitespace().nth(1));

    let Some(token) = token else {
        return unauthorized_response();
    };

    match codec.verify(token) {
        Ok(email) => {
            request.extensions_mut().insert(AuthenticatedUser::new(email));
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            unauthorized_response()
        }
    }
}

/// Extractor for the identity the gate attached to the request.
///
/// Only routes behind [`auth_middleware`] can extract this; elsewhere the
/// extension is absent and extraction fails with the same 403 envelope.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

/// Rejection for extraction outside the gate.
pub struct NotAuthenticated;

impl IntoResponse for NotAuthenticated {
    fn into_response(self) -> Response {
        unauthorized_response()
    }
}

#[async_trait::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = NotAuthenticated;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(NotAuthenticated)
    }
}

//! Uniform response envelope and API error mapping.
//!
//! Every JSON response carries `{errors: [{msg}], data}`. Success responses
//! have an empty error list; error responses have `data: null`. Internal
//! causes are logged server-side and never echoed to the caller.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::user::AuthFlowError;

/// One error entry in the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

impl ErrorMessage {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// The uniform `{errors, data}` response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub errors: Vec<ErrorMessage>,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope: no errors, payload present.
    pub fn ok(data: T) -> Self {
        Self {
            errors: Vec::new(),
            data: Some(data),
        }
    }
}

/// Builds the error body shared by every failure response.
fn error_body(messages: Vec<String>) -> Json<Envelope<serde_json::Value>> {
    Json(Envelope {
        errors: messages.into_iter().map(ErrorMessage::new).collect(),
        data: None,
    })
}

/// API error that converts flow errors to enveloped HTTP responses.
#[derive(Debug)]
pub struct ApiError(AuthFlowError);

impl From<AuthFlowError> for ApiError {
    fn from(err: AuthFlowError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, messages) = match self.0 {
            AuthFlowError::Validation(messages) => (StatusCode::BAD_REQUEST, messages),
            AuthFlowError::EmailInUse => (
                StatusCode::BAD_REQUEST,
                vec!["Email already in use".to_string()],
            ),
            AuthFlowError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                vec!["Invalid credentials".to_string()],
            ),
            AuthFlowError::UserNotFound => {
                (StatusCode::NOT_FOUND, vec!["User not found".to_string()])
            }
            AuthFlowError::PaymentFailed(cause) | AuthFlowError::Infrastructure(cause) => {
                // Cause stays server-side; the client gets a generic message.
                tracing::error!(error = %cause, "Request failed internally");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
        };

        (status, error_body(messages)).into_response()
    }
}

/// JSON body extractor that keeps rejections inside the envelope.
///
/// Axum's stock `Json` rejection is a plain-text 422; here a missing field
/// or unparseable body responds 400 with the standard error body instead.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Request body rejected");
                Err((
                    StatusCode::BAD_REQUEST,
                    error_body(vec!["Invalid request body".to_string()]),
                )
                    .into_response())
            }
        }
    }
}

/// The fixed 403 response emitted by the authorization gate.
pub fn unauthorized_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        error_body(vec!["unauthorized".to_string()]),
    )
        .into_response()
}

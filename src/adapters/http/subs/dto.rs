//! Request DTOs for the subscription endpoints.
//!
//! Responses here are processor objects passed through unmodified, so there
//! are no response DTOs.

use serde::Deserialize;

/// Body of `POST /subs/session`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub price_id: String,
}

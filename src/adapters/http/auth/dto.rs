//! Request and response DTOs for the auth endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::User;

/// Body of `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User representation including the billing customer reference
/// (signup and me responses).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithBilling {
    pub id: Uuid,
    pub email: String,
    pub billing_customer_id: String,
}

impl From<&User> for UserWithBilling {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            billing_customer_id: user.billing_customer_id.clone(),
        }
    }
}

/// User representation without the billing reference (login response;
/// the asymmetry with signup is part of the API contract).
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Success payload of `POST /auth/signup`.
#[derive(Debug, Serialize)]
pub struct SignupData {
    pub token: String,
    pub user: UserWithBilling,
}

/// Success payload of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserSummary,
}

/// Success payload of `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeData {
    pub user: UserWithBilling,
}

//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait against the Stripe REST API.
//! Requests authenticate with the secret key via HTTP basic auth and carry
//! form-encoded bodies, matching Stripe's API conventions.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::config::PaymentConfig;
use crate::ports::{CreateCheckoutRequest, Customer, PaymentError, PaymentProvider};

/// Outbound request timeout. A stuck processor call must not hold the
/// request open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API (overridable for testing).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Build from the application's payment configuration.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_api_key.expose_secret().clone())
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

/// Stripe customer object, reduced to the fields we persist.
#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
    email: Option<String>,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    ///
    /// Fails only if the HTTP client cannot be constructed; callers treat
    /// that as a startup error rather than running without the timeout.
    pub fn new(config: StripeConfig) -> Result<Self, PaymentError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PaymentError::network(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PaymentError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(%status, error = %error_text, "Stripe API call failed");
        Err(PaymentError::provider(format!(
            "Stripe API error ({status}): {error_text}"
        )))
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn create_customer(&self, email: &str) -> Result<Customer, PaymentError> {
        let params = [("email", email)];

        let response = self
            .http_client
            .post(self.url("/v1/customers"))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let customer: StripeCustomer = response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse Stripe customer: {e}"))
        })?;

        Ok(Customer {
            id: customer.id,
            email: customer.email.unwrap_or_else(|| email.to_string()),
        })
    }

    async fn list_prices(&self) -> Result<serde_json::Value, PaymentError> {
        let response = self
            .http_client
            .get(self.url("/v1/prices"))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse Stripe price list: {e}"))
        })
    }

    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<serde_json::Value, PaymentError> {
        // One card line item of quantity 1, subscription mode, bound to the
        // caller's billing customer.
        let params = [
            ("mode", "subscription"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price]", &request.price_id),
            ("line_items[0][quantity]", "1"),
            ("success_url", &request.success_url),
            ("cancel_url", &request.cancel_url),
            ("customer", &request.customer_id),
        ];

        let response = self
            .http_client
            .post(self.url("/v1/checkout/sessions"))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse checkout session: {e}"))
        })
    }
}

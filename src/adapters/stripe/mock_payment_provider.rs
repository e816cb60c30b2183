//! Mock payment provider for testing.
//!
//! Configurable `PaymentProvider` implementation supporting pre-set
//! responses, error injection, and call tracking.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{CreateCheckoutRequest, Customer, PaymentError, PaymentProvider};

/// Mock payment provider for tests.
///
/// By default every call succeeds: `create_customer` mints `cus_mock_N`
/// ids and the passthrough calls return empty JSON objects.
#[derive(Default)]
pub struct MockPaymentProvider {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    /// Customers created so far (in creation order).
    created_customers: Vec<Customer>,

    /// Checkout requests received so far.
    checkout_requests: Vec<CreateCheckoutRequest>,

    /// Price list to return.
    prices: Option<serde_json::Value>,

    /// Checkout session to return.
    checkout_session: Option<serde_json::Value>,

    /// Error to return on every subsequent call.
    error: Option<PaymentError>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every subsequent call with the given error.
    pub fn set_error(&self, error: PaymentError) {
        self.state.lock().unwrap().error = Some(error);
    }

    /// Set the price list returned by `list_prices`.
    pub fn set_prices(&self, prices: serde_json::Value) {
        self.state.lock().unwrap().prices = Some(prices);
    }

    /// Set the session object returned by `create_checkout_session`.
    pub fn set_checkout_session(&self, session: serde_json::Value) {
        self.state.lock().unwrap().checkout_session = Some(session);
    }

    /// Customers created through the port, in order.
    pub fn created_customers(&self) -> Vec<Customer> {
        self.state.lock().unwrap().created_customers.clone()
    }

    /// Checkout requests received through the port, in order.
    pub fn checkout_requests(&self) -> Vec<CreateCheckoutRequest> {
        self.state.lock().unwrap().checkout_requests.clone()
    }

    fn check_error(&self) -> Result<(), PaymentError> {
        match &self.state.lock().unwrap().error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_customer(&self, email: &str) -> Result<Customer, PaymentError> {
        self.check_error()?;

        let mut state = self.state.lock().unwrap();
        let customer = Customer {
            id: format!("cus_mock_{}", state.created_customers.len() + 1),
            email: email.to_string(),
        };
        state.created_customers.push(customer.clone());
        Ok(customer)
    }

    async fn list_prices(&self) -> Result<serde_json::Value, PaymentError> {
        self.check_error()?;

        Ok(self
            .state
            .lock()
            .unwrap()
            .prices
            .clone()
            .unwrap_or_else(|| serde_json::json!({"object": "list", "data": []})))
    }

    async fn create_checkout_session(
        &self,
        request: CreateCheckoutRequest,
    ) -> Result<serde_json::Value, PaymentError> {
        self.check_error()?;

        let mut state = self.state.lock().unwrap();
        state.checkout_requests.push(request);
        Ok(state
            .checkout_session
            .clone()
            .unwrap_or_else(|| serde_json::json!({"id": "cs_mock", "url": "https://example.com"})))
    }
}

//! ListPricesHandler - query handler for the processor's price list.

use std::sync::Arc;

use crate::domain::user::AuthFlowError;
use crate::ports::PaymentProvider;

/// Handler returning the payment processor's price list unmodified.
pub struct ListPricesHandler {
    payments: Arc<dyn PaymentProvider>,
}

impl ListPricesHandler {
    pub fn new(payments: Arc<dyn PaymentProvider>) -> Self {
        Self { payments }
    }

    pub async fn handle(&self) -> Result<serde_json::Value, AuthFlowError> {
        self.payments.list_prices().await.map_err(|e| {
            tracing::warn!(error = %e, "Price listing failed");
            AuthFlowError::payment_failed(e.to_string())
        })
    }
}

//! Billing flow handlers: price listing and checkout-session creation.

mod create_checkout;
mod list_prices;

pub use create_checkout::{CreateCheckoutCommand, CreateCheckoutHandler};
pub use list_prices::ListPricesHandler;

//! Ports: async traits for external collaborators.

mod payment_provider;
mod token_codec;
mod user_repository;

pub use payment_provider::{CreateCheckoutRequest, Customer, PaymentError, PaymentProvider};
pub use token_codec::TokenCodec;
pub use user_repository::{RepositoryError, UserRepository};

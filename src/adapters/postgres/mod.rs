//! Credential store adapters: PostgreSQL for production, in-memory for tests.

mod in_memory;
mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use user_repository::PgUserRepository;

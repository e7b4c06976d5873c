//! PostgreSQL-backed credential store.

mod connections;
mod postgres_store;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use postgres_store::PostgresCredentialStore;

#[cfg(test)]
mod tests;

//! # Warden Infrastructure
//!
//! Concrete implementations of the ports defined in `warden-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL credential store via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod store;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use store::InMemoryCredentialStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2Config, Argon2PasswordHasher, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresCredentialStore};

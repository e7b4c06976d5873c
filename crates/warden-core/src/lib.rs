//! # Warden Core
//!
//! The domain layer of the Warden authentication service.
//! This crate contains the credential pipeline with zero infrastructure
//! dependencies: hashing, token signing and persistence sit behind the
//! traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{AuthError, StoreError, TokenError};
pub use service::AuthService;

//! # Warden Shared
//!
//! Wire types exchanged with clients of the authentication API.
//! Request DTOs carry their own field constraints; response DTOs only ever
//! expose the public subset of an account.

pub mod dto;
pub mod response;

pub use dto::{AuthResponse, FieldViolation, LoginRequest, RegisterRequest, UserResponse};
pub use response::{ErrorCode, ErrorResponse};

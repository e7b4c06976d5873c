//! Domain-level error types.

use thiserror::Error;
use warden_shared::{ErrorCode, FieldViolation};

/// Authentication errors - everything `AuthService` can return.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    /// Covers both unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    Conflict,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable wire code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::Validation(_) => ErrorCode::ValidationError,
            AuthError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AuthError::Conflict => ErrorCode::Conflict,
            AuthError::Token(e) => e.code(),
            AuthError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bearer token verification failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,
}

impl TokenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::Expired => ErrorCode::TokenExpired,
            TokenError::Malformed => ErrorCode::TokenMalformed,
            TokenError::BadSignature => ErrorCode::TokenBadSignature,
        }
    }
}

/// Credential store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account with this email already exists")]
    Conflict,

    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AuthError::Conflict,
            other => AuthError::Internal(other.to_string()),
        }
    }
}

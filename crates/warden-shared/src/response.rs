//! Error response types (RFC 7807 compliant).

use serde::{Deserialize, Serialize};

use crate::dto::FieldViolation;

/// Stable, machine-readable error codes. Clients branch on these, never on `detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    ValidationError,
    InvalidCredentials,
    Conflict,
    TokenExpired,
    TokenMalformed,
    TokenBadSignature,
    MissingAuth,
    BadRequest,
    InternalError,
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// Stable error code.
    pub code: ErrorCode,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field failures, only present for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            code,
            detail: None,
            violations: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        self.violations = violations;
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", ErrorCode::BadRequest).with_detail(detail)
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let detail = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Self::new(422, "Validation Failed", ErrorCode::ValidationError)
            .with_detail(detail)
            .with_violations(violations)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(401, "Unauthorized", ErrorCode::InvalidCredentials)
            .with_detail("Invalid email or password")
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::new(409, "Conflict", ErrorCode::Conflict).with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error", ErrorCode::InternalError)
    }
}

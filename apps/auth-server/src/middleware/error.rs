//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use warden_core::error::{AuthError, TokenError};
use warden_shared::{ErrorCode, ErrorResponse};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Auth(AuthError::Token(err))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingAuth => StatusCode::UNAUTHORIZED,
            AppError::Auth(err) => match err {
                AuthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Conflict => StatusCode::CONFLICT,
                AuthError::Token(_) => StatusCode::UNAUTHORIZED,
                AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::MissingAuth => {
                ErrorResponse::new(401, "Authentication Required", ErrorCode::MissingAuth)
                    .with_detail("Please provide a valid Bearer token in the Authorization header.")
            }
            AppError::Auth(err) => match err {
                AuthError::Validation(violations) => ErrorResponse::validation(violations.clone()),
                AuthError::InvalidCredentials => ErrorResponse::invalid_credentials(),
                AuthError::Conflict => ErrorResponse::conflict("Email already registered"),
                AuthError::Token(token_err) => token_error_response(*token_err),
                AuthError::Internal(detail) => {
                    // Cause stays in the logs, never in the response.
                    tracing::error!("Internal error: {}", detail);
                    ErrorResponse::internal_error()
                }
            },
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

fn token_error_response(err: TokenError) -> ErrorResponse {
    let detail = match err {
        TokenError::Expired => "Your authentication token has expired. Please login again.",
        TokenError::Malformed => "The authentication token is malformed.",
        TokenError::BadSignature => "The authentication token signature is invalid.",
    };

    ErrorResponse::new(401, "Invalid Token", err.code()).with_detail(detail)
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

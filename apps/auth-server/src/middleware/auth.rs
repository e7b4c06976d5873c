//! Bearer token extraction.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};

use warden_core::error::TokenError;

use super::error::AppError;

/// Raw bearer token from the `Authorization` header.
///
/// Only checks the header shape; signature and expiry are verified by
/// `AuthService`.
/// ```ignore
/// async fn protected_route(token: BearerToken) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn extract(req: &HttpRequest) -> Result<BearerToken, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AppError::from(TokenError::Malformed))?;

    // Parse "Bearer <token>"
    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(BearerToken(token.trim().to_string())),
        _ => Err(TokenError::Malformed.into()),
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_extracts_bearer_token() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();

        assert_eq!(extract(&req).unwrap().as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(extract(&req), Err(AppError::MissingAuth)));
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        for value in ["Basic dXNlcjpwYXNz", "Bearer ", "bearer abc"] {
            let req = TestRequest::default()
                .insert_header((header::AUTHORIZATION, value))
                .to_http_request();

            let err = extract(&req).unwrap_err();
            assert_eq!(err.status_code().as_u16(), 401, "{}", value);
            assert!(!matches!(err, AppError::MissingAuth));
        }
    }
}

//! JWT token service implementation.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, crypto, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_core::error::{AuthError, TokenError};
use warden_core::ports::{AccountIdentity, TokenIssuer, TokenVerifier};

/// JWT token service configuration.
///
/// Built once at startup and handed to [`JwtTokenService::new`]; never mutated.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Vec<u8>,
    pub ttl: TimeDelta,
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: TimeDelta, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl,
            issuer: issuer.into(),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // account id
    iat: i64,    // issued at
    exp: i64,    // expiration timestamp
    iss: String, // issuer
}

/// HS256 token service. Issues and verifies with the same secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(&config.secret);
        let decoding_key = DecodingKey::from_secret(&config.secret);

        // Expiry is checked against the caller's clock in `verify`, not the system clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iat", "sub", "iss"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, account_id: Uuid, now: DateTime<Utc>) -> Result<String, AuthError> {
        let exp = now + self.config.ttl;

        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {}", e)))
    }
}

impl JwtTokenService {
    /// HMAC over the raw `header.payload` bytes, before either segment is decoded.
    fn check_signature(&self, token: &str) -> Result<(), TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let message = &token[..header.len() + 1 + payload.len()];
        match crypto::verify(signature, message.as_bytes(), &self.decoding_key, Algorithm::HS256) {
            Ok(true) => Ok(()),
            Ok(false) => Err(TokenError::BadSignature),
            Err(e) => {
                tracing::debug!(error = %e, "Token signature undecodable");
                Err(TokenError::Malformed)
            }
        }
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccountIdentity, TokenError> {
        self.check_signature(token)?;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                }
            })?;
        let claims = token_data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        let account_id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)?;
        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(TokenError::Malformed)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(AccountIdentity {
            account_id,
            issued_at,
            expires_at,
        })
    }
}

//! Authentication ports: password hashing and bearer tokens.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::HashedPassword;
use crate::error::{AuthError, TokenError};

/// Identity recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountIdentity {
    pub account_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password with a freshly generated salt.
    fn hash(&self, plaintext: &str) -> Result<HashedPassword, AuthError>;

    /// Verify a password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`. `Err` means the stored hash itself is unusable.
    fn verify(&self, plaintext: &str, stored: &HashedPassword) -> Result<bool, AuthError>;
}

/// Mints signed, time-bounded bearer tokens.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `account_id`, valid from `now` for the configured lifetime.
    fn issue(&self, account_id: Uuid, now: DateTime<Utc>) -> Result<String, AuthError>;
}

/// Checks bearer tokens minted by a matching [`TokenIssuer`].
pub trait TokenVerifier: Send + Sync {
    /// Validate signature, then expiry against `now`.
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AccountIdentity, TokenError>;
}

//! Authentication orchestration.
//!
//! Register: validate -> hash -> issue -> insert.
//! Login: validate -> lookup -> verify -> issue.
//! Authenticate: verify token -> lookup by id.
//!
//! Each call is independent; the service holds only shared, read-only
//! collaborators and can be used from any number of tasks at once.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use warden_shared::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::domain::{Account, HashedPassword, mask_email, normalize_email};
use crate::error::AuthError;
use crate::ports::{AccountIdentity, CredentialStore, PasswordHasher, TokenIssuer, TokenVerifier};
use crate::validation::validate;

const DECOY_PASSWORD: &str = "warden-decoy-password";

/// Credential validation and token issuance pipeline.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
    verifier: Arc<dyn TokenVerifier>,
    /// Verified against on unknown emails so both login failures cost one hash.
    decoy: HashedPassword,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Result<Self, AuthError> {
        let decoy = hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            store,
            hasher,
            issuer,
            verifier,
            decoy,
        })
    }

    /// Register a new account and issue its first token.
    ///
    /// The token is minted before the insert, so a failed issue leaves nothing persisted.
    pub async fn register(
        &self,
        input: RegisterRequest,
        now: DateTime<Utc>,
    ) -> Result<AuthResponse, AuthError> {
        validate(&input)?;

        let email = normalize_email(&input.email);
        let password_hash = self.hasher.hash(&input.password)?;

        let account = Account::new(input.name, email, password_hash, now);
        let token = self.issuer.issue(account.id, now)?;

        let account = self.store.insert(account).await.inspect_err(|e| {
            tracing::debug!(error = %e, "Account insert rejected");
        })?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            "Account registered"
        );

        Ok(AuthResponse {
            user: account.public_view(),
            token,
        })
    }

    /// Exchange an email and password for a token.
    pub async fn login(
        &self,
        input: LoginRequest,
        now: DateTime<Utc>,
    ) -> Result<AuthResponse, AuthError> {
        validate(&input)?;

        let email = normalize_email(&input.email);

        let Some(account) = self.store.find_by_email(&email).await? else {
            // Result ignored; only the cost matters.
            let _ = self.hasher.verify(&input.password, &self.decoy);
            tracing::warn!(email = %mask_email(&email), "Login failed: unknown account");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(&input.password, &account.password_hash)? {
            tracing::warn!(account_id = %account.id, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(account.id, now)?;

        tracing::info!(account_id = %account.id, "Login succeeded");
        Ok(AuthResponse {
            user: account.public_view(),
            token,
        })
    }

    /// Verify a bearer token without touching the store.
    pub fn verify_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AccountIdentity, AuthError> {
        Ok(self.verifier.verify(token, now)?)
    }

    /// Resolve a bearer token to the public view of its account.
    pub async fn authenticate(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<UserResponse, AuthError> {
        let identity = self.verify_token(token, now)?;

        match self.store.find_by_id(identity.account_id).await? {
            Some(account) => Ok(account.public_view()),
            None => {
                tracing::warn!(
                    account_id = %identity.account_id,
                    "Valid token for missing account"
                );
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

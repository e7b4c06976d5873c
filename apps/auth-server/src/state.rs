//! Application state - shared across all handlers.

use std::sync::Arc;

use warden_core::AuthService;
use warden_core::ports::CredentialStore;
use warden_infra::{Argon2PasswordHasher, InMemoryCredentialStore, JwtTokenService};

#[cfg(feature = "postgres")]
use warden_infra::PostgresCredentialStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = build_store(config).await?;
        let hasher = Arc::new(Argon2PasswordHasher::new(config.argon2)?);
        let tokens = Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!(
            ttl_secs = config.jwt.ttl.num_seconds(),
            issuer = %config.jwt.issuer,
            "Application state initialized"
        );

        Ok(Self::from_service(AuthService::new(
            store,
            hasher,
            tokens.clone(),
            tokens,
        )?))
    }

    pub fn from_service(auth: AuthService) -> Self {
        Self { auth }
    }
}

#[cfg(feature = "postgres")]
async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    match &config.database {
        // No in-memory fallback once a database is configured.
        Some(db_config) => {
            let conn = warden_infra::database::connect(db_config).await?;
            Ok(Arc::new(PostgresCredentialStore::new(conn)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running with in-memory credential store.");
            Ok(Arc::new(InMemoryCredentialStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_store(_config: &AppConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    tracing::info!("Running without postgres feature - using in-memory credential store");
    Ok(Arc::new(InMemoryCredentialStore::new()))
}

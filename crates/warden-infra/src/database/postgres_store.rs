//! PostgreSQL credential store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, SqlErr};
use uuid::Uuid;

use warden_core::domain::{Account, mask_email};
use warden_core::error::StoreError;
use warden_core::ports::CredentialStore;

use super::entity::account::{self, Entity as AccountEntity};

/// Credential store over the `accounts` table.
///
/// Uniqueness of `email` is enforced by the database; a violation on insert
/// surfaces as [`StoreError::Conflict`].
pub struct PostgresCredentialStore {
    db: DbConn,
}

impl PostgresCredentialStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return StoreError::Conflict;
    }

    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        tracing::debug!(email = %mask_email(email), "Finding account by email");

        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        let active_model: account::ActiveModel = account.into();

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }
}

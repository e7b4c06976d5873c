use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Account;
use crate::error::StoreError;

/// Persistence contract for accounts.
///
/// Implementations own their concurrency discipline; `insert` must be an
/// atomic insert-if-absent keyed on email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an account by its (normalized) email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Find an account by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError>;

    /// Insert a new account. Fails with [`StoreError::Conflict`] when the email is taken.
    async fn insert(&self, account: Account) -> Result<Account, StoreError>;
}

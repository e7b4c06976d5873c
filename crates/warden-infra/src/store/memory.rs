//! In-memory credential store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use warden_core::domain::Account;
use warden_core::error::StoreError;
use warden_core::ports::CredentialStore;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<Uuid, Account>,
    id_by_email: HashMap<String, Uuid>,
}

/// In-memory credential store using HashMaps behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryCredentialStore {
    accounts: RwLock<Accounts>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Accounts::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;

        Ok(accounts
            .id_by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, account: Account) -> Result<Account, StoreError> {
        // Check and write under one lock so concurrent inserts of the same email can't both win.
        let mut accounts = self.accounts.write().await;

        if accounts.id_by_email.contains_key(&account.email) {
            return Err(StoreError::Conflict);
        }

        accounts
            .id_by_email
            .insert(account.email.clone(), account.id);
        accounts.by_id.insert(account.id, account.clone());

        Ok(account)
    }
}

use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use warden_core::domain::{Account, HashedPassword};
use warden_core::error::StoreError;
use warden_core::ports::CredentialStore;

use super::entity::account;
use super::postgres_store::PostgresCredentialStore;

const HASH: &str = "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA";

fn model(id: Uuid) -> account::Model {
    account::Model {
        id,
        name: "Ann Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        password_hash: HASH.to_owned(),
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_account_by_email() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(id)]])
        .into_connection();

    let store = PostgresCredentialStore::new(db);

    let account = store.find_by_email("ann@x.com").await.unwrap().unwrap();

    assert_eq!(account.id, id);
    assert_eq!(account.email, "ann@x.com");
    assert_eq!(account.password_hash.as_str(), HASH);
}

#[tokio::test]
async fn test_find_missing_account_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<account::Model>::new()])
        .into_connection();

    let store = PostgresCredentialStore::new(db);

    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_account() {
    let new_account = Account::new(
        "Ann Lee".to_string(),
        "ann@x.com".to_string(),
        HashedPassword::new(HASH),
        Utc::now(),
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(new_account.id)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresCredentialStore::new(db);

    let saved = store.insert(new_account.clone()).await.unwrap();
    assert_eq!(saved.id, new_account.id);
    assert_eq!(saved.name, "Ann Lee");
}

#[tokio::test]
async fn test_query_failure_is_not_conflict() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("boom".to_owned())])
        .into_connection();

    let store = PostgresCredentialStore::new(db);

    let result = store.find_by_email("ann@x.com").await;
    assert!(result.is_err());
    assert!(!matches!(result, Err(StoreError::Conflict)));
}

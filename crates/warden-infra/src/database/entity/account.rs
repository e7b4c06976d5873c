//! Account entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use warden_core::domain::{Account, HashedPassword};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Account.
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: HashedPassword::new(model.password_hash),
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from domain Account to SeaORM ActiveModel.
impl From<Account> for ActiveModel {
    fn from(account: Account) -> Self {
        Self {
            id: Set(account.id),
            name: Set(account.name),
            email: Set(account.email),
            password_hash: Set(account.password_hash.into_inner()),
            created_at: Set(account.created_at.into()),
        }
    }
}

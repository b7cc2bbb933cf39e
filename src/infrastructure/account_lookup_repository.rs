use async_trait::async_trait;
use entity::app_users;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::domain::{
    error::RepositoryError,
    models::account::UserRole,
    repositories::account_lookup_repository::AccountLookupRepository,
};

#[derive(Clone)]
pub struct MysqlAccountLookupRepository {
    db: DatabaseConnection,
}

impl MysqlAccountLookupRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountLookupRepository for MysqlAccountLookupRepository {
    async fn count_by_username(
        &self,
        username: &str,
        role: UserRole,
    ) -> Result<u64, RepositoryError> {
        app_users::Entity::find()
            .filter(app_users::Column::UserName.eq(username))
            .filter(app_users::Column::UserRole.eq(role.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn count_by_email(&self, email: &str) -> Result<u64, RepositoryError> {
        app_users::Entity::find()
            .filter(app_users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn count_by_contact(&self, contact: &str) -> Result<u64, RepositoryError> {
        app_users::Entity::find()
            .filter(app_users::Column::ContactNumber.eq(contact))
            .count(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }
}

use async_trait::async_trait;
use entity::{app_users, traveler};
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DatabaseTransaction, EntityTrait, TransactionTrait,
};

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{Account, AccountId, UserRole},
        credential::HashedPassword,
        traveler::TravelerSignup,
    },
    repositories::traveler_registration_repository::TravelerRegistrationRepository,
};

#[derive(Clone)]
pub struct MysqlTravelerRegistrationRepository {
    db: DatabaseConnection,
}

impl MysqlTravelerRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_pair(
        txn: &DatabaseTransaction,
        signup: &TravelerSignup,
        password_hash: &HashedPassword,
    ) -> Result<i32, RepositoryError> {
        // Insert account, taking the store-assigned identity
        let account_model = app_users::ActiveModel {
            user_name: Set(signup.username.as_str().to_string()),
            user_password: Set(password_hash.as_str().to_string()),
            contact_number: Set(signup.contact.as_str().to_string()),
            email: Set(signup.email.as_str().to_string()),
            user_role: Set(UserRole::Traveler.as_str().to_string()),
            ..Default::default()
        };

        let insert_result = app_users::Entity::insert(account_model)
            .exec(txn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let user_id = insert_result.last_insert_id;
        if user_id == 0 {
            return Err(RepositoryError::AccountInsertFailed);
        }

        // Insert profile referencing the identity
        let profile_model = traveler::ActiveModel {
            user_id: Set(user_id),
            cnic: Set(signup.cnic.as_str().to_string()),
            traveler_name: Set(signup.traveler_name.as_str().to_string()),
            preference: Set(signup.preference.as_str().to_string()),
        };

        let rows_affected = traveler::Entity::insert(profile_model)
            .exec_without_returning(txn)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if rows_affected == 0 {
            return Err(RepositoryError::ProfileInsertFailed);
        }

        Ok(user_id)
    }
}

#[async_trait]
impl TravelerRegistrationRepository for MysqlTravelerRegistrationRepository {
    async fn register_traveler(
        &self,
        signup: &TravelerSignup,
        password_hash: HashedPassword,
    ) -> Result<Account, RepositoryError> {
        // Begin transaction
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match Self::insert_pair(&txn, signup, &password_hash).await {
            Ok(user_id) => {
                txn.commit()
                    .await
                    .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

                Ok(Account::new(
                    AccountId::from_i32(user_id),
                    signup.username.clone(),
                    signup.email.clone(),
                    signup.contact.clone(),
                    UserRole::Traveler,
                ))
            }
            Err(err) => {
                // A rollback failure is recorded but never masks the
                // original insert error.
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

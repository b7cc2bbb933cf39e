use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{account::Account, credential::HashedPassword, traveler::TravelerSignup},
};

/// Repository for traveler registration that creates the account and its
/// profile atomically: either both rows are persisted or neither is.
#[async_trait]
pub trait TravelerRegistrationRepository {
    /// Register a new traveler account and profile in a single transaction.
    ///
    /// Returns the account carrying the store-assigned identity.
    async fn register_traveler(
        &self,
        signup: &TravelerSignup,
        password_hash: HashedPassword,
    ) -> Result<Account, RepositoryError>;
}

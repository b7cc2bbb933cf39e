use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::account::UserRole};

/// Read side of the live uniqueness checks: count existing account rows
/// matching a candidate value. Username is scoped to a role; email and
/// contact number are global.
#[async_trait]
pub trait AccountLookupRepository {
    async fn count_by_username(
        &self,
        username: &str,
        role: UserRole,
    ) -> Result<u64, RepositoryError>;

    async fn count_by_email(&self, email: &str) -> Result<u64, RepositoryError>;

    async fn count_by_contact(&self, contact: &str) -> Result<u64, RepositoryError>;
}

use crate::domain::{
    error::DomainError,
    models::account::UserRole,
    repositories::account_lookup_repository::AccountLookupRepository,
};

/// Outcome of a single uniqueness query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniquenessVerdict {
    Unique,
    Duplicate,
}

impl UniquenessVerdict {
    fn from_count(count: u64) -> Self {
        if count > 0 {
            Self::Duplicate
        } else {
            Self::Unique
        }
    }
}

/// Live per-field checks that need the store: the format rules live on
/// the value objects, this usecase covers the three uniqueness queries.
pub struct FieldValidationUsecase<L: AccountLookupRepository> {
    lookup_repository: L,
}

impl<L: AccountLookupRepository> FieldValidationUsecase<L> {
    pub fn new(lookup_repository: L) -> Self {
        Self { lookup_repository }
    }

    /// Username uniqueness is scoped to the Traveler role: the same
    /// username may exist for a different role.
    pub async fn check_username(&self, username: &str) -> Result<UniquenessVerdict, DomainError>
    where
        L: Send + Sync,
    {
        let count = self
            .lookup_repository
            .count_by_username(username, UserRole::Traveler)
            .await?;
        Ok(UniquenessVerdict::from_count(count))
    }

    /// Email uniqueness is global across all roles.
    pub async fn check_email(&self, email: &str) -> Result<UniquenessVerdict, DomainError>
    where
        L: Send + Sync,
    {
        let count = self.lookup_repository.count_by_email(email).await?;
        Ok(UniquenessVerdict::from_count(count))
    }

    /// Contact number uniqueness is global across all roles.
    pub async fn check_contact(&self, contact: &str) -> Result<UniquenessVerdict, DomainError>
    where
        L: Send + Sync,
    {
        let count = self.lookup_repository.count_by_contact(contact).await?;
        Ok(UniquenessVerdict::from_count(count))
    }
}

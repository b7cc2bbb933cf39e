use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid field value: {0}")]
    InvalidField(#[from] FieldFault),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("FAILED TO INSERT USER RECORD")]
    AccountInsertFailed,

    #[error("FAILED TO INSERT TRAVELER RECORD")]
    ProfileInsertFailed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Why a single form field is considered invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldFault {
    #[error("value does not satisfy the field format rule")]
    Format,

    #[error("value is already registered")]
    Duplicate,

    #[error("confirmation does not match the password")]
    Mismatch,

    #[error("uniqueness check failed: {0}")]
    Integration(String),
}

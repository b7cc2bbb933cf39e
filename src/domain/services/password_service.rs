use crate::domain::{
    error::DomainError,
    models::credential::{HashedPassword, Password},
};

/// Service for hashing passwords before they reach storage.
pub trait PasswordHasher: Clone {
    /// Hash a plain text password
    fn hash(&self, plain_password: &Password) -> Result<HashedPassword, DomainError>;
}

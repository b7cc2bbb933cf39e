use sha2::{Digest, Sha256};

use crate::domain::{
    error::DomainError,
    models::credential::{HashedPassword, Password},
    services::password_service::PasswordHasher,
};

/// SHA-256 digest of the raw password bytes, stored as lowercase hex.
///
/// Deterministic and unsalted, matching the digests already present in
/// the `AppUsers` table. New deployments that do not need to
/// authenticate against existing rows should swap this implementation
/// for a salted KDF behind the same trait.
#[derive(Clone)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plain_password: &Password) -> Result<HashedPassword, DomainError> {
        let digest = Sha256::digest(plain_password.as_str().as_bytes());
        Ok(HashedPassword::new(hex::encode(digest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(raw: &str) -> Password {
        Password::parse(raw).unwrap()
    }

    #[test]
    fn digest_is_deterministic() {
        let hasher = Sha256PasswordHasher::new();
        let first = hasher.hash(&password("Password123")).unwrap();
        let second = hasher.hash(&password("Password123")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn digest_matches_known_vector() {
        let hasher = Sha256PasswordHasher::new();
        let hash = hasher.hash(&password("Password123")).unwrap();
        assert_eq!(
            hash.as_str(),
            "008c70392e3abfbd0fa47bbc2ed96aa99bd49e159727fcba0f2e6abeb3a9d601"
        );
    }
}

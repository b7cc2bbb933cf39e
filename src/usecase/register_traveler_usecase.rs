use crate::domain::{
    error::DomainError,
    models::{account::Account, credential::Password, traveler::TravelerSignup},
    repositories::traveler_registration_repository::TravelerRegistrationRepository,
    services::password_service::PasswordHasher,
};

/// Final stage of the sign-up flow: hash the password and persist the
/// account/profile pair atomically.
pub struct RegisterTravelerUsecase<R: TravelerRegistrationRepository, P: PasswordHasher> {
    registration_repository: R,
    password_hasher: P,
}

impl<R: TravelerRegistrationRepository, P: PasswordHasher> RegisterTravelerUsecase<R, P> {
    pub fn new(registration_repository: R, password_hasher: P) -> Self {
        Self {
            registration_repository,
            password_hasher,
        }
    }

    pub async fn register(
        &self,
        signup: &TravelerSignup,
        password: &Password,
    ) -> Result<Account, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        // Hash password
        let password_hash = self.password_hasher.hash(password)?;

        // Persist account and profile atomically
        let account = self
            .registration_repository
            .register_traveler(signup, password_hash)
            .await?;

        tracing::info!(username = %account.username().as_str(), "registered new traveler");

        Ok(account)
    }
}

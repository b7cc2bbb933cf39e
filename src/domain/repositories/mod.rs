pub mod account_lookup_repository;
pub mod traveler_registration_repository;

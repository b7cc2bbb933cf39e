pub mod field_validation_usecase;
pub mod register_traveler_usecase;

//! Traveler sign-up for the TravelEase desktop application.
//!
//! The rendering toolkit is not part of this crate. A host UI binds its
//! widgets to [`presentation::screen::SignupScreen`], which owns the
//! field contents, per-field validity, the live uniqueness checks and
//! the atomic account/profile registration write.

pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;

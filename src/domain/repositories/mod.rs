//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CamperRepository`] - Camper CRUD
//! - [`ActivityRepository`] - Activity listing, creation and deletion
//! - [`SignupRepository`] - Signup creation and per-camper lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod activity_repository;
pub mod camper_repository;
pub mod signup_repository;

pub use activity_repository::ActivityRepository;
pub use camper_repository::CamperRepository;
pub use signup_repository::SignupRepository;

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
#[cfg(test)]
pub use camper_repository::MockCamperRepository;
#[cfg(test)]
pub use signup_repository::MockSignupRepository;

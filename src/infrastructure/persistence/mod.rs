//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Rows are decoded into private `FromRow` structs and converted into domain
//! entities, so the domain layer never sees SQL types.
//!
//! # Repositories
//!
//! - [`PgCamperRepository`] - Camper storage
//! - [`PgActivityRepository`] - Activity storage
//! - [`PgSignupRepository`] - Signup storage with joined camper/activity reads

pub mod pg_activity_repository;
pub mod pg_camper_repository;
pub mod pg_signup_repository;
mod rows;

pub use pg_activity_repository::PgActivityRepository;
pub use pg_camper_repository::PgCamperRepository;
pub use pg_signup_repository::PgSignupRepository;

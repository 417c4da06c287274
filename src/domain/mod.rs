//! Domain layer: camp entities, their write rules, and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Campers, activities, signups and their validated write inputs
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on PostgreSQL. Repository
//! traits are implemented in [`crate::infrastructure::persistence`] and
//! consumed by [`crate::application::services`].

pub mod entities;
pub mod repositories;

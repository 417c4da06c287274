//! Application layer services implementing the camp's use cases.
//!
//! Services validate write inputs, coordinate repository calls and turn
//! missing rows into [`crate::error::AppError::NotFound`]. Handlers talk only
//! to services.
//!
//! # Available Services
//!
//! - [`services::camper_service::CamperService`] - Camper listing, detail, creation and patching
//! - [`services::activity_service::ActivityService`] - Activity listing, creation and deletion
//! - [`services::signup_service::SignupService`] - Signup creation

pub mod services;

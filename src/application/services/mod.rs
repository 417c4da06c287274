//! Business logic services for the application layer.

pub mod activity_service;
pub mod camper_service;
pub mod signup_service;

pub use activity_service::ActivityService;
pub use camper_service::CamperService;
pub use signup_service::SignupService;

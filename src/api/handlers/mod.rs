//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers are stateless:
//! everything they need arrives through [`crate::state::AppState`].

pub mod activities;
pub mod campers;
pub mod health;
pub mod signups;

pub use activities::{activity_list_handler, delete_activity_handler};
pub use campers::{
    camper_list_handler, create_camper_handler, get_camper_handler, update_camper_handler,
};
pub use health::{health_handler, index_handler};
pub use signups::create_signup_handler;

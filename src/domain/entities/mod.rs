//! Core camp entities.
//!
//! # Entity Types
//!
//! - [`Camper`] - A participant, aged 8 to 18
//! - [`Activity`] - An offered activity with a difficulty rating
//! - [`Signup`] - A camper booked onto an activity at an hour of the day
//!
//! Composite read models:
//!
//! - [`SignupDetail`] - A signup together with its camper and activity
//! - [`CamperDetail`] - A camper together with all of its signup details
//!
//! # Write Inputs
//!
//! Writes go through separate input structs (`NewCamper`, `CamperPatch`,
//! `NewActivity`, `NewSignup`) that derive [`validator::Validate`]. Services
//! validate them before any storage call.

pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, CamperDetail, CamperPatch, NewCamper};
pub use signup::{NewSignup, Signup, SignupDetail};


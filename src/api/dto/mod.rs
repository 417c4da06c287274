//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are deserialized with Serde and converted into domain write
//! inputs; validation of those inputs lives in the domain layer. Response
//! types are the serialization views of the entities:
//!
//! - [`camper::CamperSummary`] - `{id, name, age}`
//! - [`camper::CamperDetailResponse`] - summary plus `signups`
//! - [`activity::ActivityItem`] - `{id, name, difficulty}`
//! - [`signup::SignupResponse`] - signup with bare `camper` and `activity`
//!
//! Nested camper/activity views never carry `signups`, so serialization
//! cannot loop.

pub mod activity;
pub mod camper;
pub mod health;
pub mod signup;

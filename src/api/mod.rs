//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and shapes the
//! JSON responses.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies and serialization views
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

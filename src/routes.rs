//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Empty index page
//! - `GET /health`  - Health check (database)
//! - resource routes from [`crate::api::routes::resource_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer, bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::resource_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so `/campers/` and `/campers` resolve to the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

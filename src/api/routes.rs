//! Resource route table.

use crate::api::handlers::{
    activity_list_handler, camper_list_handler, create_camper_handler, create_signup_handler,
    delete_activity_handler, get_camper_handler, update_camper_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET    /campers`         - List campers
/// - `POST   /campers`         - Create a camper
/// - `GET    /campers/{id}`    - Camper with its signups
/// - `PATCH  /campers/{id}`    - Partially update a camper
/// - `GET    /activities`      - List activities
/// - `DELETE /activities/{id}` - Delete an activity and its signups
/// - `POST   /signups`         - Book a camper onto an activity
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campers",
            get(camper_list_handler).post(create_camper_handler),
        )
        .route(
            "/campers/{id}",
            get(get_camper_handler).patch(update_camper_handler),
        )
        .route("/activities", get(activity_list_handler))
        .route("/activities/{id}", delete(delete_activity_handler))
        .route("/signups", post(create_signup_handler))
}

//! Handlers for camper endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::camper::{
    CamperDetailResponse, CamperSummary, CreateCamperRequest, UpdateCamperRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all campers.
///
/// # Endpoint
///
/// `GET /campers`
pub async fn camper_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CamperSummary>>, AppError> {
    let campers = state.camper_service.list_campers().await?;

    Ok(Json(campers.into_iter().map(CamperSummary::from).collect()))
}

/// Creates a camper.
///
/// # Endpoint
///
/// `POST /campers`
///
/// # Errors
///
/// Returns 400 if the body is malformed, the name is empty, or the age is
/// outside 8..=18.
pub async fn create_camper_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), AppError> {
    let Json(payload) = payload?;

    let camper = state.camper_service.create_camper(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(camper.into())))
}

/// Returns a camper with its signups.
///
/// # Endpoint
///
/// `GET /campers/{id}`
///
/// # Errors
///
/// Returns 404 if the camper does not exist or the id is not an integer.
pub async fn get_camper_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CamperDetailResponse>, AppError> {
    let Path(id) = id.map_err(|_| AppError::not_found("Camper"))?;
    let detail = state.camper_service.get_camper(id).await?;

    Ok(Json(detail.into()))
}

/// Partially updates a camper.
///
/// # Endpoint
///
/// `PATCH /campers/{id}`
///
/// Accepts `name` and/or `age`. Responds 202 with the updated summary.
///
/// # Errors
///
/// Returns 404 if the camper does not exist, whatever the body holds.
/// Returns 400 on unknown fields, `null` values, or rule violations.
pub async fn update_camper_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperSummary>), AppError> {
    let Path(id) = id.map_err(|_| AppError::not_found("Camper"))?;
    state.camper_service.find_camper(id).await?;

    let Json(payload) = payload?;
    let patch = payload.into_patch()?;

    let camper = state.camper_service.update_camper(id, patch).await?;

    Ok((StatusCode::ACCEPTED, Json(camper.into())))
}

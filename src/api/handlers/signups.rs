//! Handler for signup creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::signup::{CreateSignupRequest, SignupResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Books a camper onto an activity.
///
/// # Endpoint
///
/// `POST /signups`
///
/// # Request Body
///
/// ```json
/// { "camper_id": 1, "activity_id": 2, "time": 9 }
/// ```
///
/// # Errors
///
/// Returns 400 if `time` is outside 0..=23, the camper or activity does not
/// exist, or the body is malformed. Nothing is persisted in that case.
pub async fn create_signup_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let Json(payload) = payload?;

    let detail = state.signup_service.create_signup(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

//! Handlers for activity endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::activity::ActivityItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all activities.
///
/// # Endpoint
///
/// `GET /activities`
pub async fn activity_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityItem>>, AppError> {
    let activities = state.activity_service.list_activities().await?;

    Ok(Json(activities.into_iter().map(ActivityItem::from).collect()))
}

/// Deletes an activity and its signups.
///
/// # Endpoint
///
/// `DELETE /activities/{id}`
///
/// # Errors
///
/// Returns 404 if the activity does not exist or the id is not an integer.
pub async fn delete_activity_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|_| AppError::not_found("Activity"))?;
    state.activity_service.delete_activity(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

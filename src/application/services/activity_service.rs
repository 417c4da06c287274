//! Activity management service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Activity, NewActivity};
use crate::domain::repositories::ActivityRepository;
use crate::error::AppError;

/// Service for listing, creating and deleting activities.
pub struct ActivityService<R: ActivityRepository + ?Sized = dyn ActivityRepository> {
    repository: Arc<R>,
}

impl<R> ActivityService<R>
where
    R: ActivityRepository + ?Sized,
{
    /// Creates a new activity service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all activities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        self.repository.list().await
    }

    /// Creates an activity. Used by seeding; there is no HTTP route for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity, AppError> {
        new_activity.validate()?;

        let activity = self.repository.create(new_activity).await?;
        tracing::info!(activity_id = activity.id, "Activity created");

        Ok(activity)
    }

    /// Deletes an activity together with its signups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the activity does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_activity(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Activity"));
        }

        tracing::info!(activity_id = id, "Activity deleted");
        Ok(())
    }

    /// Counts stored activities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_activities(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

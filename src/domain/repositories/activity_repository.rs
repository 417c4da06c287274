//! Repository trait for activities.

use crate::domain::entities::{Activity, NewActivity};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for activities.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgActivityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Lists all activities ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Activity>, AppError>;

    /// Inserts an activity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a schema constraint rejects the row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_activity: NewActivity) -> Result<Activity, AppError>;

    /// Deletes an activity and, through the foreign key cascade, its signups.
    ///
    /// Returns `false` if no activity had this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored activities.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

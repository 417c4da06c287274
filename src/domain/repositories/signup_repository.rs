//! Repository trait for signups.

use crate::domain::entities::{NewSignup, SignupDetail};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for signups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSignupRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupRepository: Send + Sync {
    /// Inserts a signup and returns it with its camper and activity.
    ///
    /// The insert and the read-back happen in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `camper_id` or `activity_id` does
    /// not reference an existing row, or a check constraint fails.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_signup: NewSignup) -> Result<SignupDetail, AppError>;

    /// Lists a camper's signups ordered by id, each with its activity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_camper(&self, camper_id: i64) -> Result<Vec<SignupDetail>, AppError>;

    /// Counts stored signups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

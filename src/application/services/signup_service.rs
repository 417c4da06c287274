//! Signup service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{NewSignup, SignupDetail};
use crate::domain::repositories::SignupRepository;
use crate::error::AppError;

/// Service for booking campers onto activities.
///
/// The hour is validated here; the existence of the camper and the activity
/// is enforced by storage inside the insert transaction.
pub struct SignupService<R: SignupRepository + ?Sized = dyn SignupRepository> {
    repository: Arc<R>,
}

impl<R> SignupService<R>
where
    R: SignupRepository + ?Sized,
{
    /// Creates a new signup service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a signup and returns it with its camper and activity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `time` is outside 0..=23 or a
    /// referenced camper/activity does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_signup(&self, new_signup: NewSignup) -> Result<SignupDetail, AppError> {
        new_signup.validate()?;

        let detail = self.repository.create(new_signup).await?;
        tracing::info!(
            signup_id = detail.signup.id,
            camper_id = detail.signup.camper_id,
            activity_id = detail.signup.activity_id,
            "Signup created"
        );

        Ok(detail)
    }
}

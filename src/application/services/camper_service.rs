//! Camper management service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Camper, CamperDetail, CamperPatch, NewCamper};
use crate::domain::repositories::{CamperRepository, SignupRepository};
use crate::error::AppError;

/// Service for listing, reading, creating and patching campers.
///
/// Every write is validated against the camper rules (non-empty name,
/// age 8..=18) before storage is touched.
pub struct CamperService<
    C: CamperRepository + ?Sized = dyn CamperRepository,
    S: SignupRepository + ?Sized = dyn SignupRepository,
> {
    camper_repository: Arc<C>,
    signup_repository: Arc<S>,
}

impl<C, S> CamperService<C, S>
where
    C: CamperRepository + ?Sized,
    S: SignupRepository + ?Sized,
{
    /// Creates a new camper service.
    pub fn new(camper_repository: Arc<C>, signup_repository: Arc<S>) -> Self {
        Self {
            camper_repository,
            signup_repository,
        }
    }

    /// Lists all campers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_campers(&self) -> Result<Vec<Camper>, AppError> {
        self.camper_repository.list().await
    }

    /// Loads a camper together with its signups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camper does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_camper(&self, id: i64) -> Result<CamperDetail, AppError> {
        let camper = self.find_camper(id).await?;
        let signups = self.signup_repository.list_for_camper(id).await?;

        Ok(CamperDetail { camper, signups })
    }

    /// Creates a camper.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty or the age is out of range.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_camper(&self, new_camper: NewCamper) -> Result<Camper, AppError> {
        new_camper.validate()?;

        let camper = self.camper_repository.create(new_camper).await?;
        tracing::info!(camper_id = camper.id, "Camper created");

        Ok(camper)
    }

    /// Applies a partial update to a camper.
    ///
    /// An empty patch is a no-op that returns the current camper.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camper does not exist.
    /// Returns [`AppError::Validation`] if a patched field breaks the camper rules.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_camper(&self, id: i64, patch: CamperPatch) -> Result<Camper, AppError> {
        let current = self.find_camper(id).await?;
        patch.validate()?;

        if patch.is_empty() {
            return Ok(current);
        }

        let camper = self
            .camper_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Camper"))?;
        tracing::info!(camper_id = camper.id, "Camper updated");

        Ok(camper)
    }

    /// Loads a camper without its signups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camper does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_camper(&self, id: i64) -> Result<Camper, AppError> {
        self.camper_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Camper"))
    }
}

//! Repository trait for campers.

use crate::domain::entities::{Camper, CamperPatch, NewCamper};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for campers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCamperRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CamperRepository: Send + Sync {
    /// Lists all campers ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Camper>, AppError>;

    /// Finds a camper by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Camper>, AppError>;

    /// Inserts a camper.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a schema constraint rejects the row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_camper: NewCamper) -> Result<Camper, AppError>;

    /// Applies a partial update. Returns `None` if the camper does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a schema constraint rejects the row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: CamperPatch) -> Result<Option<Camper>, AppError>;

    /// Counts stored campers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

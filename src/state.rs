//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{ActivityService, CamperService, SignupService};
use crate::domain::repositories::{ActivityRepository, CamperRepository, SignupRepository};
use crate::infrastructure::persistence::{
    PgActivityRepository, PgCamperRepository, PgSignupRepository,
};

/// Services shared by all handlers.
///
/// Cloned per request by axum; clones share the same services. There is no
/// process-wide store handle: the state is built once at startup and passed
/// to the router.
#[derive(Clone)]
pub struct AppState {
    pub camper_service: Arc<CamperService>,
    pub activity_service: Arc<ActivityService>,
    pub signup_service: Arc<SignupService>,
}

impl AppState {
    /// Builds the state from arbitrary repository implementations.
    pub fn new(
        camper_repository: Arc<dyn CamperRepository>,
        activity_repository: Arc<dyn ActivityRepository>,
        signup_repository: Arc<dyn SignupRepository>,
    ) -> Self {
        Self {
            camper_service: Arc::new(CamperService::new(
                camper_repository,
                signup_repository.clone(),
            )),
            activity_service: Arc::new(ActivityService::new(activity_repository)),
            signup_service: Arc::new(SignupService::new(signup_repository)),
        }
    }

    /// Builds the state over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgCamperRepository::new(pool.clone())),
            Arc::new(PgActivityRepository::new(pool.clone())),
            Arc::new(PgSignupRepository::new(pool)),
        )
    }
}

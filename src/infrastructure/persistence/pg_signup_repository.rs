//! PostgreSQL implementation of the signup repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{SIGNUP_DETAIL_SELECT, SignupDetailRow};
use crate::domain::entities::{NewSignup, SignupDetail};
use crate::domain::repositories::SignupRepository;
use crate::error::AppError;

/// PostgreSQL repository for signups.
///
/// Foreign keys on `camper_id` and `activity_id` are enforced by the schema;
/// violations surface as [`AppError::Validation`].
pub struct PgSignupRepository {
    pool: Arc<PgPool>,
}

impl PgSignupRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignupRepository for PgSignupRepository {
    async fn create(&self, new_signup: NewSignup) -> Result<SignupDetail, AppError> {
        // Dropping `tx` on any early return rolls the insert back.
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO signups (camper_id, activity_id, time)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(new_signup.camper_id)
        .bind(new_signup.activity_id)
        .bind(new_signup.time)
        .fetch_one(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, SignupDetailRow>(&format!(
            "{SIGNUP_DETAIL_SELECT} WHERE s.id = $1"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn list_for_camper(&self, camper_id: i64) -> Result<Vec<SignupDetail>, AppError> {
        let rows = sqlx::query_as::<_, SignupDetailRow>(&format!(
            "{SIGNUP_DETAIL_SELECT} WHERE s.camper_id = $1 ORDER BY s.id"
        ))
        .bind(camper_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(SignupDetail::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM signups")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

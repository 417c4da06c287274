//! PostgreSQL implementation of the activity repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ActivityRow;
use crate::domain::entities::{Activity, NewActivity};
use crate::domain::repositories::ActivityRepository;
use crate::error::AppError;

/// PostgreSQL repository for activities.
///
/// Deleting an activity removes its signups through `ON DELETE CASCADE`.
pub struct PgActivityRepository {
    pool: Arc<PgPool>,
}

impl PgActivityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, AppError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn create(&self, new_activity: NewActivity) -> Result<Activity, AppError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            INSERT INTO activities (name, difficulty)
            VALUES ($1, $2)
            RETURNING id, name, difficulty
            "#,
        )
        .bind(new_activity.name)
        .bind(new_activity.difficulty)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

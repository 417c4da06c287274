//! PostgreSQL implementation of the camper repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::CamperRow;
use crate::domain::entities::{Camper, CamperPatch, NewCamper};
use crate::domain::repositories::CamperRepository;
use crate::error::AppError;

/// PostgreSQL repository for campers.
pub struct PgCamperRepository {
    pool: Arc<PgPool>,
}

impl PgCamperRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CamperRepository for PgCamperRepository {
    async fn list(&self) -> Result<Vec<Camper>, AppError> {
        let rows = sqlx::query_as::<_, CamperRow>("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Camper::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Camper>, AppError> {
        let row = sqlx::query_as::<_, CamperRow>("SELECT id, name, age FROM campers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Camper::from))
    }

    async fn create(&self, new_camper: NewCamper) -> Result<Camper, AppError> {
        let row = sqlx::query_as::<_, CamperRow>(
            r#"
            INSERT INTO campers (name, age)
            VALUES ($1, $2)
            RETURNING id, name, age
            "#,
        )
        .bind(new_camper.name)
        .bind(new_camper.age)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: CamperPatch) -> Result<Option<Camper>, AppError> {
        // Single statement: either both fields change or neither does.
        let row = sqlx::query_as::<_, CamperRow>(
            r#"
            UPDATE campers SET
                name = COALESCE($2, name),
                age  = COALESCE($3, age)
            WHERE id = $1
            RETURNING id, name, age
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.age)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Camper::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campers")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

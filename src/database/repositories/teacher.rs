//! Teacher repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use chrono::Utc;

use super::TeacherRepository;
use crate::models::teacher::{Teacher, CreateTeacherRequest};
use crate::utils::errors::Result;

#[derive(Clone, Debug)]
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher> {
        let now = Utc::now();
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (first_name, last_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, created_at, updated_at
            "#
        )
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(teacher)
    }

    async fn find_all(&self) -> Result<Vec<Teacher>> {
        let teachers = sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teachers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(teacher)
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM teachers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

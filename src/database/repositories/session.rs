//! Session repository implementation
//!
//! Participants live in the `participate` join table with an explicit
//! `position` column so the list keeps its order across saves.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use chrono::Utc;

use super::SessionRepository;
use crate::models::session::{Session, SessionRow, SessionRequest};
use crate::utils::errors::{YogaStudioError, Result};

const SESSION_COLUMNS: &str = "id, name, date, teacher_id, description, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn participants(&self, session_id: i64) -> Result<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT user_id FROM participate WHERE session_id = $1 ORDER BY position ASC"
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(user_id,)| user_id).collect())
    }

    async fn replace_participants(
        tx: &mut Transaction<'_, Postgres>,
        session_id: i64,
        users: &[i64],
    ) -> Result<()> {
        sqlx::query("DELETE FROM participate WHERE session_id = $1")
            .bind(session_id)
            .execute(&mut **tx)
            .await?;

        if users.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO participate (session_id, user_id, position)
            SELECT $1, t.user_id, t.position
            FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(user_id, position)
            "#
        )
        .bind(session_id)
        .bind(users)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Bump `updated_at`, holding the session row lock until the transaction ends
    async fn touch(tx: &mut Transaction<'_, Postgres>, session_id: i64) -> Result<()> {
        let touched = sqlx::query("UPDATE sessions SET updated_at = $2 WHERE id = $1")
            .bind(session_id)
            .bind(Utc::now())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if touched == 0 {
            return Err(YogaStudioError::SessionNotFound { session_id });
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, request: SessionRequest) -> Result<Session> {
        let users = request.users.unwrap_or_default();
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            INSERT INTO sessions (name, date, teacher_id, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.date)
        .bind(request.teacher_id)
        .bind(request.description)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        Self::replace_participants(&mut tx, row.id, &users).await?;
        tx.commit().await?;

        Ok(row.into_session(users))
    }

    async fn save(&self, session: &Session) -> Result<Session> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SessionRow>(&format!(
            r#"
            UPDATE sessions
            SET name = $2,
                date = $3,
                teacher_id = $4,
                description = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session.id)
        .bind(&session.name)
        .bind(session.date)
        .bind(session.teacher_id)
        .bind(&session.description)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(YogaStudioError::SessionNotFound { session_id: session.id })?;

        Self::replace_participants(&mut tx, session.id, &session.users).await?;
        tx.commit().await?;

        Ok(row.into_session(session.users.clone()))
    }

    async fn add_participant(&self, session_id: i64, user_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        Self::touch(&mut tx, session_id).await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO participate (session_id, user_id, position)
            SELECT $1::BIGINT, $2::BIGINT, COALESCE(MAX(position), 0) + 1
            FROM participate
            WHERE session_id = $1
            ON CONFLICT (session_id, user_id) DO NOTHING
            "#
        )
        .bind(session_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        Ok(inserted > 0)
    }

    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        Self::touch(&mut tx, session_id).await?;

        let removed = sqlx::query("DELETE FROM participate WHERE session_id = $1 AND user_id = $2")
            .bind(session_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(removed > 0)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Session>> {
        let rows = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        let links: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT session_id, user_id FROM participate ORDER BY session_id ASC, position ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        let mut participants: HashMap<i64, Vec<i64>> = HashMap::new();
        for (session_id, user_id) in links {
            participants.entry(session_id).or_default().push(user_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let users = participants.remove(&row.id).unwrap_or_default();
                row.into_session(users)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let users = self.participants(row.id).await?;
                Ok(Some(row.into_session(users)))
            }
            None => Ok(None),
        }
    }
}

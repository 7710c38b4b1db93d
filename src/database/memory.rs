//! In-memory store
//!
//! Implements every repository trait over shared maps. Used by the test suite
//! and by `database.backend = "memory"` for local runs without PostgreSQL.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::repositories::{SessionRepository, TeacherRepository, UserRepository};
use crate::models::{CreateTeacherRequest, CreateUserRequest, Session, SessionRequest, Teacher, User};
use crate::utils::errors::{Result, YogaStudioError};

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    teachers: BTreeMap<i64, Teacher>,
    sessions: BTreeMap<i64, Session>,
    next_user_id: i64,
    next_teacher_id: i64,
    next_session_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, request: CreateUserRequest) -> Result<User> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.email == request.email) {
            return Err(YogaStudioError::EmailAlreadyTaken);
        }

        let now = Utc::now();
        let user = User {
            id: next_id(&mut state.next_user_id),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
            admin: request.admin,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.email == email))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_some() {
            for session in state.sessions.values_mut() {
                session.users.retain(|user_id| *user_id != id);
            }
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.state.read().await.users.len() as i64)
    }
}

#[async_trait]
impl TeacherRepository for InMemoryStore {
    async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let teacher = Teacher {
            id: next_id(&mut state.next_teacher_id),
            first_name: request.first_name,
            last_name: request.last_name,
            created_at: now,
            updated_at: now,
        };
        state.teachers.insert(teacher.id, teacher.clone());

        Ok(teacher)
    }

    async fn find_all(&self) -> Result<Vec<Teacher>> {
        Ok(self.state.read().await.teachers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        Ok(self.state.read().await.teachers.get(&id).cloned())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.state.read().await.teachers.len() as i64)
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn create(&self, request: SessionRequest) -> Result<Session> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let session = Session {
            id: next_id(&mut state.next_session_id),
            name: request.name,
            date: request.date,
            teacher_id: request.teacher_id,
            description: request.description,
            users: request.users.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        state.sessions.insert(session.id, session.clone());

        Ok(session)
    }

    async fn save(&self, session: &Session) -> Result<Session> {
        let mut state = self.state.write().await;
        let stored = state
            .sessions
            .get_mut(&session.id)
            .ok_or(YogaStudioError::SessionNotFound { session_id: session.id })?;

        let created_at = stored.created_at;
        *stored = Session {
            created_at,
            updated_at: Utc::now(),
            ..session.clone()
        };

        Ok(stored.clone())
    }

    async fn add_participant(&self, session_id: i64, user_id: i64) -> Result<bool> {
        let mut state = self.state.write().await;
        let session = state
            .sessions
            .get_mut(&session_id)
            .ok_or(YogaStudioError::SessionNotFound { session_id })?;

        if session.has_participant(user_id) {
            return Ok(false);
        }
        session.users.push(user_id);
        session.updated_at = Utc::now();
        Ok(true)
    }

    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<bool> {
        let mut state = self.state.write().await;
        let session = state
            .sessions
            .get_mut(&session_id)
            .ok_or(YogaStudioError::SessionNotFound { session_id })?;

        if !session.has_participant(user_id) {
            return Ok(false);
        }
        session.users.retain(|id| *id != user_id);
        session.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.state.write().await.sessions.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Session>> {
        Ok(self.state.read().await.sessions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>> {
        Ok(self.state.read().await.sessions.get(&id).cloned())
    }
}

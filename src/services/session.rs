//! Session service implementation
//!
//! CRUD over yoga sessions and the participate / un-participate actions.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::database::{DatabaseService, SessionRepository, TeacherRepository, UserRepository};
use crate::models::session::{Session, SessionRequest};
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::dedup_preserving_order;
use crate::utils::logging::log_session_action;

#[derive(Clone)]
pub struct SessionService {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    teachers: Arc<dyn TeacherRepository>,
}

impl SessionService {
    pub fn new(database: &DatabaseService) -> Self {
        Self {
            sessions: database.sessions.clone(),
            users: database.users.clone(),
            teachers: database.teachers.clone(),
        }
    }

    /// Persist a new session
    pub async fn create(&self, mut request: SessionRequest) -> Result<Session> {
        request.validate()?;
        self.ensure_teacher(request.teacher_id).await?;
        if let Some(users) = request.users.take() {
            request.users = Some(self.checked_participants(&users).await?);
        }

        let session = self.sessions.create(request).await?;
        log_session_action(session.id, "create", None);
        Ok(session)
    }

    /// Overwrite the fields of an existing session
    ///
    /// Participants are kept unless the request carries a `users` list.
    pub async fn update(&self, id: i64, request: SessionRequest) -> Result<Session> {
        request.validate()?;
        let existing = self
            .sessions
            .find_by_id(id)
            .await?
            .ok_or(YogaStudioError::SessionNotFound { session_id: id })?;
        self.ensure_teacher(request.teacher_id).await?;

        let users = match request.users {
            Some(users) => self.checked_participants(&users).await?,
            None => existing.users,
        };

        let session = Session {
            id,
            name: request.name,
            date: request.date,
            teacher_id: request.teacher_id,
            description: request.description,
            users,
            created_at: existing.created_at,
            updated_at: existing.updated_at,
        };

        let saved = self.sessions.save(&session).await?;
        log_session_action(id, "update", None);
        Ok(saved)
    }

    /// Remove a session by id. Existence is not checked here.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.sessions.delete(id).await?;
        log_session_action(id, "delete", None);
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Session>> {
        debug!("Listing sessions");
        self.sessions.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Session>> {
        debug!(session_id = id, "Getting session by ID");
        self.sessions.find_by_id(id).await
    }

    /// Add a user to the participant list
    pub async fn participate(&self, session_id: i64, user_id: i64) -> Result<Session> {
        if self.sessions.find_by_id(session_id).await?.is_none() {
            return Err(YogaStudioError::SessionNotFound { session_id });
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(YogaStudioError::UserNotFound { user_id });
        }

        if !self.sessions.add_participant(session_id, user_id).await? {
            return Err(YogaStudioError::AlreadyParticipating { session_id, user_id });
        }

        let session = self.reload(session_id).await?;
        info!(session_id, user_id, participants = session.users.len(), "User joined session");
        log_session_action(session_id, "participate", Some(user_id));
        Ok(session)
    }

    /// Remove a user from the participant list
    pub async fn no_longer_participate(&self, session_id: i64, user_id: i64) -> Result<Session> {
        if self.sessions.find_by_id(session_id).await?.is_none() {
            return Err(YogaStudioError::SessionNotFound { session_id });
        }

        if !self.sessions.remove_participant(session_id, user_id).await? {
            return Err(YogaStudioError::NotParticipating { session_id, user_id });
        }

        let session = self.reload(session_id).await?;
        info!(session_id, user_id, participants = session.users.len(), "User left session");
        log_session_action(session_id, "no_longer_participate", Some(user_id));
        Ok(session)
    }

    async fn reload(&self, session_id: i64) -> Result<Session> {
        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or(YogaStudioError::SessionNotFound { session_id })
    }

    async fn ensure_teacher(&self, teacher_id: i64) -> Result<()> {
        if self.teachers.find_by_id(teacher_id).await?.is_none() {
            return Err(YogaStudioError::InvalidInput(format!("Unknown teacher: {}", teacher_id)));
        }
        Ok(())
    }

    async fn checked_participants(&self, users: &[i64]) -> Result<Vec<i64>> {
        let users = dedup_preserving_order(users);
        for user_id in &users {
            if self.users.find_by_id(*user_id).await?.is_none() {
                return Err(YogaStudioError::InvalidInput(format!("Unknown participant: {}", user_id)));
            }
        }
        Ok(users)
    }
}

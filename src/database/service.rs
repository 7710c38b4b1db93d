//! Database service layer
//!
//! Bundles the repositories behind one handle that the services share.

use std::sync::Arc;

use crate::database::memory::InMemoryStore;
use crate::database::repositories::{
    PgSessionRepository, PgTeacherRepository, PgUserRepository, SessionRepository, TeacherRepository,
    UserRepository,
};
use crate::database::{connection, DatabasePool};
use crate::utils::errors::YogaStudioError;

#[derive(Clone)]
pub struct DatabaseService {
    pub users: Arc<dyn UserRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pool: Option<DatabasePool>,
}

impl DatabaseService {
    /// Repositories backed by PostgreSQL
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            teachers: Arc::new(PgTeacherRepository::new(pool.clone())),
            sessions: Arc::new(PgSessionRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Repositories sharing a single in-memory store
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            teachers: Arc::new(store.clone()),
            sessions: Arc::new(store),
            pool: None,
        }
    }

    /// Check the backing store is reachable
    pub async fn health_check(&self) -> Result<(), YogaStudioError> {
        match &self.pool {
            Some(pool) => connection::health_check(pool).await,
            None => Ok(()),
        }
    }
}

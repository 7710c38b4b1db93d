//! Database repositories module
//!
//! Repositories are async traits so the services can run against PostgreSQL
//! in production and against the in-memory store in tests and local runs.

pub mod user;
pub mod teacher;
pub mod session;

use async_trait::async_trait;

use crate::models::{CreateTeacherRequest, CreateUserRequest, Session, SessionRequest, Teacher, User};
use crate::utils::errors::Result;

// Re-export repositories
pub use user::PgUserRepository;
pub use teacher::PgTeacherRepository;
pub use session::PgSessionRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert an account; the password must already be hashed
    async fn create(&self, request: CreateUserRequest) -> Result<User>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Delete by id. Participations of the user are removed with it.
    async fn delete(&self, id: i64) -> Result<()>;

    async fn count(&self) -> Result<i64>;
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create(&self, request: CreateTeacherRequest) -> Result<Teacher>;

    async fn find_all(&self) -> Result<Vec<Teacher>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>>;

    async fn count(&self) -> Result<i64>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a session; `request.users` becomes the initial participant list
    async fn create(&self, request: SessionRequest) -> Result<Session>;

    /// Persist fields and participant list of an existing session
    async fn save(&self, session: &Session) -> Result<Session>;

    /// Append one participant at the end of the list
    ///
    /// Returns `false` when the user already participates. Fails with
    /// `SessionNotFound` for an unknown session.
    async fn add_participant(&self, session_id: i64, user_id: i64) -> Result<bool>;

    /// Remove one participant; returns `false` when the user was not listed
    async fn remove_participant(&self, session_id: i64, user_id: i64) -> Result<bool>;

    /// Delete by id; a missing id is not an error
    async fn delete(&self, id: i64) -> Result<()>;

    /// All sessions in ascending id order
    async fn find_all(&self) -> Result<Vec<Session>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>>;
}

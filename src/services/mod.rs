//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod session;
pub mod teacher;
pub mod user;

// Re-export commonly used services
pub use auth::AuthService;
pub use session::SessionService;
pub use teacher::TeacherService;
pub use user::UserService;

use serde::Serialize;
use tracing::warn;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::security::JwtService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub session_service: SessionService,
    pub teacher_service: TeacherService,
    pub user_service: UserService,
    database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, settings: &Settings) -> Self {
        let jwt = JwtService::new(&settings.jwt);

        Self {
            auth_service: AuthService::new(&database, jwt),
            session_service: SessionService::new(&database),
            teacher_service: TeacherService::new(&database),
            user_service: UserService::new(&database),
            database,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let database_healthy = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        ServiceHealthStatus {
            status: if database_healthy { "UP" } else { "DOWN" },
            database_healthy,
        }
    }
}

/// Health status of the service layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealthStatus {
    pub status: &'static str,
    pub database_healthy: bool,
}

impl ServiceHealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.database_healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_factory_is_healthy() {
        let factory = ServiceFactory::new(DatabaseService::in_memory(), &Settings::default());
        let status = factory.health_check().await;
        assert!(status.is_healthy());
        assert_eq!(status.status, "UP");
    }
}

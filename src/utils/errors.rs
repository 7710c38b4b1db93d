//! Error handling for YogaStudio
//!
//! This module defines the main error type used throughout the application,
//! its mapping onto HTTP responses, and a unified severity model for logging.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

/// Main error type for YogaStudio application
#[derive(Error, Debug)]
pub enum YogaStudioError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Teacher not found: {teacher_id}")]
    TeacherNotFound { teacher_id: i64 },

    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: i64 },

    #[error("Error: Email is already taken!")]
    EmailAlreadyTaken,

    #[error("User {user_id} already participates in session {session_id}")]
    AlreadyParticipating { session_id: i64, user_id: i64 },

    #[error("User {user_id} does not participate in session {session_id}")]
    NotParticipating { session_id: i64, user_id: i64 },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Token signing error: {0}")]
    TokenSigning(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Result type alias for YogaStudio operations
pub type Result<T> = std::result::Result<T, YogaStudioError>;

impl YogaStudioError {
    /// Stable machine-readable code used in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            YogaStudioError::Database(_) => "DATABASE_ERROR",
            YogaStudioError::Migration(_) => "MIGRATION_ERROR",
            YogaStudioError::Config(_) => "CONFIG_ERROR",
            YogaStudioError::UserNotFound { .. }
            | YogaStudioError::TeacherNotFound { .. }
            | YogaStudioError::SessionNotFound { .. } => "NOT_FOUND",
            YogaStudioError::EmailAlreadyTaken
            | YogaStudioError::AlreadyParticipating { .. }
            | YogaStudioError::NotParticipating { .. }
            | YogaStudioError::InvalidInput(_) => "BAD_REQUEST",
            YogaStudioError::Validation(_) => "VALIDATION_ERROR",
            YogaStudioError::Authentication(_) => "UNAUTHORIZED",
            YogaStudioError::Token(_) => "TOKEN_ERROR",
            YogaStudioError::PasswordHash(_)
            | YogaStudioError::TokenSigning(_) => "INTERNAL_ERROR",
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            YogaStudioError::Database(_) => ErrorSeverity::Critical,
            YogaStudioError::Migration(_) => ErrorSeverity::Critical,
            YogaStudioError::Config(_) => ErrorSeverity::Critical,
            YogaStudioError::Authentication(_) => ErrorSeverity::Warning,
            YogaStudioError::Token(_) => ErrorSeverity::Warning,
            YogaStudioError::PasswordHash(_) => ErrorSeverity::Error,
            YogaStudioError::TokenSigning(_) => ErrorSeverity::Error,
            _ => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ResponseError for YogaStudioError {
    fn status_code(&self) -> StatusCode {
        match self {
            YogaStudioError::UserNotFound { .. }
            | YogaStudioError::TeacherNotFound { .. }
            | YogaStudioError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            YogaStudioError::EmailAlreadyTaken
            | YogaStudioError::AlreadyParticipating { .. }
            | YogaStudioError::NotParticipating { .. }
            | YogaStudioError::Validation(_)
            | YogaStudioError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            YogaStudioError::Authentication(_) | YogaStudioError::Token(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self.severity() {
            ErrorSeverity::Info => info!(status = status.as_u16(), error = %self, "Request rejected"),
            ErrorSeverity::Warning => warn!(status = status.as_u16(), error = %self, "Request rejected"),
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                error!(status = status.as_u16(), severity = %self.severity(), error = %self, "Request failed")
            }
        }

        // Infrastructure details stay in the logs
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message,
        })
    }
}

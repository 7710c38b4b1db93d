//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod teacher;
pub mod session;
pub mod auth;

// Re-export commonly used models
pub use user::{User, CreateUserRequest};
pub use teacher::{Teacher, CreateTeacherRequest};
pub use session::{Session, SessionRow, SessionRequest};
pub use auth::{LoginRequest, SignupRequest, JwtResponse, MessageResponse};

//! YogaStudio booking backend
//!
//! HTTP service for a yoga studio: account registration and login, class
//! sessions with participant lists, and the teacher catalogue. Storage is
//! PostgreSQL in production with an in-memory store for tests and local runs.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, YogaStudioError};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::configure;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

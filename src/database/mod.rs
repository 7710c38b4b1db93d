//! Database module
//!
//! This module handles database connections, repositories and seed data

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use memory::InMemoryStore;
pub use repositories::{UserRepository, TeacherRepository, SessionRepository};
pub use service::DatabaseService;

//! Middleware module
//!
//! Request authentication for the protected API scopes

pub mod auth;

pub use auth::{AuthenticatedUser, JwtAuth};

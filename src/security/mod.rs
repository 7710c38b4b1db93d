//! Security primitives
//!
//! Password hashing and bearer token handling.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService};

//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{YogaStudioError, Result};
use super::{Settings, StorageBackend};

/// Minimum HS256 secret length in bytes
const MIN_JWT_SECRET_LEN: usize = 32;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_jwt_config(&settings.jwt)?;
    validate_bootstrap_config(&settings.bootstrap)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(YogaStudioError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if config.workers == 0 {
        return Err(YogaStudioError::Config(
            "Server workers must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.backend == StorageBackend::Memory {
        return Ok(());
    }

    if config.url.is_empty() {
        return Err(YogaStudioError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(YogaStudioError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(YogaStudioError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_secs == 0 {
        return Err(YogaStudioError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate token signing configuration
fn validate_jwt_config(config: &super::JwtConfig) -> Result<()> {
    if config.secret.len() < MIN_JWT_SECRET_LEN {
        return Err(YogaStudioError::Config(
            format!("JWT secret must be at least {} bytes", MIN_JWT_SECRET_LEN)
        ));
    }

    if config.expiration_ms == 0 {
        return Err(YogaStudioError::Config(
            "JWT expiration must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate bootstrap configuration
fn validate_bootstrap_config(config: &super::BootstrapConfig) -> Result<()> {
    if config.admin_email.trim().is_empty() {
        return Err(YogaStudioError::Config(
            "Bootstrap admin email is required".to_string()
        ));
    }

    if config.admin_password.is_empty() {
        return Err(YogaStudioError::Config(
            "Bootstrap admin password is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(YogaStudioError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(YogaStudioError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the YogaStudio application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{Result, YogaStudioError};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| YogaStudioError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "yoga-studio.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| YogaStudioError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log account actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log session management actions
pub fn log_session_action(session_id: i64, action: &str, user_id: Option<i64>) {
    info!(
        session_id = session_id,
        action = action,
        user_id = user_id,
        "Session action performed"
    );
}

/// Log a rejected authentication attempt
pub fn log_auth_failure(email: &str, reason: &str) {
    warn!(email = email, reason = reason, "Authentication failed");
}

/// Log seeding of reference data
pub fn log_seed(entity: &str, inserted: usize) {
    if inserted > 0 {
        info!(entity = entity, inserted = inserted, "Seed data inserted");
    } else {
        debug!(entity = entity, "Seed data already present");
    }
}

//! PostgreSQL pool, migrations and liveness check

use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::utils::errors::Result;

pub type DatabasePool = PgPool;

fn optional_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Strip credentials before the URL reaches the logs
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Connect a pool sized and timed by the database settings
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(optional_secs(config.idle_timeout_secs))
        .max_lifetime(optional_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await?;

    health_check(&pool).await?;

    info!(
        url = %redact_url(&config.url),
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Apply the embedded migrations from `migrations/`
pub async fn run_migrations(pool: &DatabasePool) -> Result<()> {
    let migrator = sqlx::migrate!("./migrations");
    migrator.run(pool).await?;

    info!(known = migrator.iter().count(), "Database schema up to date");
    Ok(())
}

/// Round-trip a trivial query
pub async fn health_check(pool: &DatabasePool) -> Result<()> {
    let started = Instant::now();
    sqlx::query("SELECT 1").execute(pool).await?;
    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Database ping");
    Ok(())
}

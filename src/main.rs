//! YogaStudio booking backend
//!
//! Main application entry point

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use YogaStudio::{
    config::{Settings, StorageBackend},
    database::{connection, seed, DatabaseService},
    handlers,
    services::ServiceFactory,
    utils::logging,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", YogaStudio::info());

    let database_service = match settings.database.backend {
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = connection::create_pool(&settings.database).await?;

            if settings.database.run_migrations {
                info!("Running database migrations...");
                connection::run_migrations(&pool).await?;
            }
            DatabaseService::postgres(pool)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage, data is lost on shutdown");
            DatabaseService::in_memory()
        }
    };

    seed::run(&database_service, &settings.bootstrap).await?;

    info!("Initializing services...");
    let services = ServiceFactory::new(database_service, &settings);

    let (host, port) = settings.bind_address();
    info!(host = %host, port, workers = settings.server.workers, "HTTP server listening");

    HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| handlers::configure(cfg, &services))
    })
    .workers(settings.server.workers)
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await?;

    info!("YogaStudio has been shut down.");
    Ok(())
}

//! HTTP handlers module
//!
//! Route table for the public API:
//! - `/api/auth` login and registration (public)
//! - `/api/session`, `/api/teacher`, `/api/user` (bearer token required)
//! - `/health` (public)

pub mod auth;
pub mod health;
pub mod session;
pub mod teacher;
pub mod user;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::middleware::JwtAuth;
use crate::services::ServiceFactory;
use crate::utils::errors::YogaStudioError;

/// Register every route and the shared application data
pub fn configure(cfg: &mut web::ServiceConfig, services: &ServiceFactory) {
    let auth = JwtAuth::new(services.auth_service.jwt().clone());

    cfg.app_data(web::Data::new(services.clone()))
        .app_data(json_config())
        .route("/health", web::get().to(health::health))
        .service(
            web::scope("/api/auth")
                .route("/login", web::post().to(auth::login))
                .route("/register", web::post().to(auth::register)),
        )
        .service(
            web::scope("/api/session")
                .wrap(auth.clone())
                .route("", web::get().to(session::find_all))
                .route("", web::post().to(session::create))
                .route("/{id}", web::get().to(session::find_by_id))
                .route("/{id}", web::put().to(session::update))
                .route("/{id}", web::delete().to(session::delete))
                .route("/{id}/participate/{user_id}", web::post().to(session::participate))
                .route("/{id}/participate/{user_id}", web::delete().to(session::no_longer_participate)),
        )
        .service(
            web::scope("/api/teacher")
                .wrap(auth.clone())
                .route("", web::get().to(teacher::find_all))
                .route("/{id}", web::get().to(teacher::find_by_id)),
        )
        .service(
            web::scope("/api/user")
                .wrap(auth)
                .route("/{id}", web::get().to(user::find_by_id))
                .route("/{id}", web::delete().to(user::delete)),
        );
}

/// Malformed or mistyped JSON bodies are answered with a 400 error body
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        YogaStudioError::InvalidInput(err.to_string()).into()
    })
}

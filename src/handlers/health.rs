//! Liveness endpoint

use actix_web::{web, HttpResponse};

use crate::services::ServiceFactory;

/// GET /health, 503 when the backing store is unreachable
pub async fn health(services: web::Data<ServiceFactory>) -> HttpResponse {
    let status = services.health_check().await;
    if status.is_healthy() {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}

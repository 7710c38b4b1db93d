//! Login and registration endpoints

use actix_web::{web, HttpResponse};

use crate::models::auth::{LoginRequest, SignupRequest};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// POST /api/auth/login
pub async fn login(
    services: web::Data<ServiceFactory>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let response = services.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/auth/register
pub async fn register(
    services: web::Data<ServiceFactory>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse> {
    let response = services.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

//! Session endpoints

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::middleware::AuthenticatedUser;
use crate::models::session::SessionRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::parse_id;

pub async fn find_all(services: web::Data<ServiceFactory>) -> Result<HttpResponse> {
    let sessions = services.session_service.find_all().await?;
    Ok(HttpResponse::Ok().json(sessions))
}

pub async fn find_by_id(
    services: web::Data<ServiceFactory>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let session = services
        .session_service
        .get_by_id(id)
        .await?
        .ok_or(YogaStudioError::SessionNotFound { session_id: id })?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn create(
    services: web::Data<ServiceFactory>,
    user: AuthenticatedUser,
    request: web::Json<SessionRequest>,
) -> Result<HttpResponse> {
    debug!(user_id = user.id, "Creating session");
    let session = services.session_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn update(
    services: web::Data<ServiceFactory>,
    path: web::Path<String>,
    request: web::Json<SessionRequest>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let session = services.session_service.update(id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn delete(
    services: web::Data<ServiceFactory>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    if services.session_service.get_by_id(id).await?.is_none() {
        return Err(YogaStudioError::SessionNotFound { session_id: id });
    }

    services.session_service.delete(id).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn participate(
    services: web::Data<ServiceFactory>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (id, user_id) = path.into_inner();
    let (id, user_id) = (parse_id(&id)?, parse_id(&user_id)?);

    services.session_service.participate(id, user_id).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn no_longer_participate(
    services: web::Data<ServiceFactory>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (id, user_id) = path.into_inner();
    let (id, user_id) = (parse_id(&id)?, parse_id(&user_id)?);

    services.session_service.no_longer_participate(id, user_id).await?;
    Ok(HttpResponse::Ok().finish())
}

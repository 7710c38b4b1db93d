//! User account endpoints

use actix_web::{web, HttpResponse};

use crate::middleware::AuthenticatedUser;
use crate::services::ServiceFactory;
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::parse_id;

pub async fn find_by_id(
    services: web::Data<ServiceFactory>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let user = services
        .user_service
        .find_by_id(id)
        .await?
        .ok_or(YogaStudioError::UserNotFound { user_id: id })?;
    Ok(HttpResponse::Ok().json(user))
}

/// Only the account owner may delete it
pub async fn delete(
    services: web::Data<ServiceFactory>,
    caller: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    services.user_service.delete_account(id, &caller.email).await?;
    Ok(HttpResponse::Ok().finish())
}

//! Teacher endpoints (read-only)

use actix_web::{web, HttpResponse};

use crate::services::ServiceFactory;
use crate::utils::errors::{Result, YogaStudioError};
use crate::utils::helpers::parse_id;

pub async fn find_all(services: web::Data<ServiceFactory>) -> Result<HttpResponse> {
    let teachers = services.teacher_service.find_all().await?;
    Ok(HttpResponse::Ok().json(teachers))
}

pub async fn find_by_id(
    services: web::Data<ServiceFactory>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_id(&path)?;
    let teacher = services
        .teacher_service
        .find_by_id(id)
        .await?
        .ok_or(YogaStudioError::TeacherNotFound { teacher_id: id })?;
    Ok(HttpResponse::Ok().json(teacher))
}

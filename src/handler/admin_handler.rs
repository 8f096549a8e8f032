use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::admin_dto::{CreateAdminRequest, UpdateAdminRequest};
use crate::model::admin::Admin;
use crate::repository::admin_repo::AdminRepository;
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn create_admin_handler(
    State(repo): State<Arc<dyn AdminRepository>>,
    Json(payload): Json<CreateAdminRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    info!("Creating admin {}", payload.username);
    let created = repo.create(Admin::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_admins_handler(
    State(repo): State<Arc<dyn AdminRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let admins = repo.find_all().await?;
    Ok(Json(admins))
}

pub async fn get_admin_handler(
    State(repo): State<Arc<dyn AdminRepository>>,
    Path(id): Path<i64>,
) -> Result<Response, HandlerError> {
    match repo.find_by_id(id).await? {
        Some(admin) => Ok(Json(admin).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update_admin_handler(
    State(repo): State<Arc<dyn AdminRepository>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAdminRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = repo.update(id, Admin::from(payload)).await?;
    Ok(Json(updated))
}

pub async fn delete_admin_handler(
    State(repo): State<Arc<dyn AdminRepository>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HandlerError> {
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::employee_dto::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use crate::model::employee::Employee;
use crate::repository::employee_repo::EmployeeRepository;
use crate::util::error::{HandlerError, HandlerErrorKind};

pub async fn create_employee_handler(
    State(repo): State<Arc<dyn EmployeeRepository>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    info!("Creating employee {}", payload.email);
    let created = repo.create(Employee::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(created))))
}

pub async fn list_employees_handler(
    State(repo): State<Arc<dyn EmployeeRepository>>,
) -> Result<impl IntoResponse, HandlerError> {
    let employees = repo.find_all().await?;
    let employees: Vec<EmployeeResponse> =
        employees.into_iter().map(EmployeeResponse::from).collect();
    Ok(Json(employees))
}

pub async fn get_employee_handler(
    State(repo): State<Arc<dyn EmployeeRepository>>,
    Path(id): Path<String>,
) -> Result<Response, HandlerError> {
    match repo.find_by_id(&id).await? {
        Some(employee) => Ok(Json(EmployeeResponse::from(employee)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update_employee_handler(
    State(repo): State<Arc<dyn EmployeeRepository>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!("Validation error: {}", e),
            details: None,
        });
    }
    let updated = repo.update(&id, Employee::from(payload)).await?;
    Ok(Json(EmployeeResponse::from(updated)))
}

pub async fn delete_employee_handler(
    State(repo): State<Arc<dyn EmployeeRepository>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

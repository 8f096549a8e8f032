use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    Internal,
    Conflict,
    BadRequest,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::Conflict => "Conflict",
            HandlerErrorKind::BadRequest => "BadRequest",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Missing records answer with a bare 404, no body
        if matches!(self.error, HandlerErrorKind::NotFound) {
            return status.into_response();
        }
        (status, axum::Json(self)).into_response()
    }
}

impl From<RepositoryError> for HandlerError {
    fn from(err: RepositoryError) -> Self {
        let (kind, message) = match &err {
            RepositoryError::NotFound(msg) => (HandlerErrorKind::NotFound, msg.clone()),
            RepositoryError::AlreadyExists(msg) => (HandlerErrorKind::Conflict, msg.clone()),
            RepositoryError::ValidationError(msg) => (HandlerErrorKind::BadRequest, msg.clone()),
            RepositoryError::DatabaseError(msg)
            | RepositoryError::ConnectionError(msg)
            | RepositoryError::SerializationError(msg) => (HandlerErrorKind::Internal, msg.clone()),
            RepositoryError::Generic(e) => (HandlerErrorKind::Internal, e.to_string()),
        };
        HandlerError {
            error: kind,
            message,
            details: None,
        }
    }
}

pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mediator::{ErrorKind, FieldErrors};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Titles and details shared by every error body.
pub mod messages {
    pub const VALIDATION_TITLE: &str = "Validation Error";
    pub const VALIDATION_DETAIL: &str = "One or more validation errors occurred";
    pub const NOT_FOUND_TITLE: &str = "Not Found";
    pub const NOT_FOUND_DETAIL: &str = "The requested resource was not found";
    pub const BAD_REQUEST_TITLE: &str = "Bad Request";
    pub const INTERNAL_TITLE: &str = "An error occurred";
    pub const INTERNAL_DETAIL: &str = "An internal server error occurred";
}

/// Error body returned by every endpoint.
///
/// ```json
/// {
///   "title": "Validation Error",
///   "status": 400,
///   "detail": "One or more validation errors occurred",
///   "errors": { "price": ["Price must be greater than zero"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Field name → messages; present only for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::INTERNAL_TITLE,
            messages::INTERNAL_DETAIL,
        )
    }

    pub fn into_response_with_status(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<T, AppError>;

/// Anything an HTTP handler can fail with.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error(transparent)]
    Request(#[from] mediator::Error),

    #[error("JSON extraction error: {0}")]
    Json(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    Path(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    Query(#[from] QueryRejection),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds the response body, logging unexpected failures with full detail.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::Request(err) => match err.kind() {
                ErrorKind::Validation => {
                    tracing::debug!(code = err.code(), "Validation error: {}", err.description());
                    let body = ErrorResponse::new(
                        StatusCode::BAD_REQUEST,
                        messages::VALIDATION_TITLE,
                        messages::VALIDATION_DETAIL,
                    );
                    match err.field_errors() {
                        Some(fields) => body.with_errors(fields.clone()),
                        None => body.with_errors(FieldErrors::from([(
                            err.code().to_string(),
                            vec![err.description().to_string()],
                        )])),
                    }
                }
                ErrorKind::NotFound => {
                    tracing::debug!(code = err.code(), "Not found: {}", err.description());
                    ErrorResponse::new(
                        StatusCode::NOT_FOUND,
                        messages::NOT_FOUND_TITLE,
                        err.description(),
                    )
                }
                ErrorKind::Failure => {
                    tracing::error!(
                        code = err.code(),
                        internal = err.internal().unwrap_or_default(),
                        "Request failed: {}",
                        err.description()
                    );
                    ErrorResponse::internal()
                }
            },
            AppError::Json(rejection) => {
                tracing::warn!("JSON extraction error: {:?}", rejection);
                bad_request(rejection.body_text())
            }
            AppError::Path(rejection) => {
                tracing::warn!("Path extraction error: {:?}", rejection);
                bad_request(rejection.body_text())
            }
            AppError::Query(rejection) => {
                tracing::warn!("Query extraction error: {:?}", rejection);
                bad_request(rejection.body_text())
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                ErrorResponse::internal()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ErrorResponse::internal()
            }
        }
    }
}

fn bad_request(detail: String) -> ErrorResponse {
    ErrorResponse::new(StatusCode::BAD_REQUEST, messages::BAD_REQUEST_TITLE, detail)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_error_response().into_response_with_status()
    }
}

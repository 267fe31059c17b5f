//! Error Types
//!
//! Layered error types with HTTP status code and error code mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::current_request_id;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("loan product with id {0} does not exist")]
    LoanProductNotFound(i32),

    #[error("base salary {salary} is below the minimum of {minimum}")]
    SalaryBelowMinimum { salary: i32, minimum: i32 },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with {field} '{value}' not found")]
    NotFound {
        resource: String,
        field: String,
        value: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Domain(DomainError::LoanProductNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Domain(DomainError::SalaryBelowMinimum { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable, machine-readable error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Domain(DomainError::LoanProductNotFound(_)) => "PRESTAMO_NOT_FOUND",
            Self::Domain(DomainError::SalaryBelowMinimum { .. }) => "SALARY_BELOW_MINIMUM",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    /// Request body or query string that could not be decoded
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Split a `"field: message"` validation entry into its parts
fn field_error(entry: &str) -> FieldError {
    match entry.split_once(": ") {
        Some((field, message)) => FieldError {
            field: field.to_string(),
            message: message.to_string(),
        },
        None => FieldError {
            field: String::new(),
            message: entry.to_string(),
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(errors.iter().map(|e| field_error(e)).collect())
                } else {
                    None
                };
                if let UseCaseError::Repository(source) = uc_error {
                    tracing::error!(error = %source, "Repository failure while handling request");
                }
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.to_string(), details)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR".to_string(), msg.clone(), None)
            }
            ApiError::InvalidId(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_ID".to_string(), msg.clone(), None)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: current_request_id().map(|id| id.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

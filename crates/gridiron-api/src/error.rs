//! HTTP error type
//!
//! Every failure leaves the API as `{ "error": <kind>, "message": <text> }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use gridiron_core::DomainError;
use gridiron_security::JwtError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "Conflict", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DatabaseError",
                    "A database error occurred".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".into())
            }
            DomainError::UsernameAlreadyExists(_) | DomainError::TeamNameAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            DomainError::UserNotFound
            | DomainError::TeamNotFound(_)
            | DomainError::PlayerNotFound(_)
            | DomainError::GameNotFound(_)
            | DomainError::InjuryNotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::ValidationError(msg) | DomainError::UnknownReference(msg) => {
                ApiError::BadRequest(msg)
            }
            DomainError::DatabaseNotConfigured
            | DomainError::DatabaseUnavailable(_)
            | DomainError::DatabaseError(_) => {
                ApiError::DatabaseError(err.to_string())
            }
            DomainError::PasswordHashError(_) | DomainError::TokenGenerationError(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MissingSecret | JwtError::CreationError(_) => {
                ApiError::InternalError(err.to_string())
            }
            JwtError::TokenExpired => ApiError::Unauthorized("Token has expired".into()),
            JwtError::ValidationError(_) | JwtError::WrongTokenType(_) => {
                ApiError::Unauthorized("Invalid token".into())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

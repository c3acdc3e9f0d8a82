//! Unified error handling.
//!
//! Provides a single application error wrapping domain errors and store
//! failures, convertible into Axum HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, FieldErrors};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// Domain error, carried unchanged across layers
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store failure, propagated unmodified
    #[cfg(feature = "database")]
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error("Operation cancelled")]
    Cancelled,

    /// Detail is kept in `Display`; HTTP responses hide it
    #[error("{0}")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation { .. } => "VALIDATION_ERROR",
                DomainError::NotFound { .. } => "NOT_FOUND",
                DomainError::Unauthorized(_) => "UNAUTHORIZED",
                DomainError::BusinessRule(_) => "BUSINESS_RULE",
                DomainError::SyncConflict { .. } => "SYNC_CONFLICT",
            },
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Cancelled => "CANCELLED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                DomainError::BusinessRule(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DomainError::SyncConflict { .. } => StatusCode::CONFLICT,
            },
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(err) => err.message().to_string(),
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Cancelled => self.to_string(),
        }
    }

    /// Borrow the domain error, if this is one
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                fields: self
                    .as_domain()
                    .and_then(DomainError::field_errors)
                    .filter(|fields| !fields.is_empty())
                    .cloned(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Domain(DomainError::validation(msg))
    }

    pub fn not_found(entity_name: impl Into<String>, id: impl ToString) -> Self {
        AppError::Domain(DomainError::not_found(entity_name, id))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

//! Unified error handling for the store and the HTTP boundary.
//!
//! Provides:
//! - `StoreError`, the failure category for everything the persistence layer reports
//! - `AppError`, the application error converted into Axum HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, INTERNAL_ERROR_MESSAGE};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised while talking to the relational store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A write breached a uniqueness or CHECK constraint on the users table
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity loss, timeout or an internal store fault
    #[error("Database error: {0}")]
    Database(#[source] DbErr),
}

impl StoreError {
    /// Check if the error is a uniqueness breach
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return StoreError::ConstraintViolation(detail);
        }
        match check_violation(&err) {
            Some(detail) => StoreError::ConstraintViolation(detail),
            None => StoreError::Database(err),
        }
    }
}

/// `SqlErr` has no CHECK variant, so ask the driver error directly.
fn check_violation(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
            if e.is_check_violation() =>
        {
            Some(e.message().to_string())
        }
        _ => None,
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Generic, detail-free description of the failure
    #[cfg_attr(
        feature = "openapi",
        schema(example = "An error occurred while processing your request.")
    )]
    pub message: String,
}

impl ErrorResponse {
    /// The fixed body sent for every internal failure
    pub fn internal() -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Store(StoreError::ConstraintViolation(_)) => "CONSTRAINT_VIOLATION",
            AppError::Store(StoreError::Database(_)) => "DATABASE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code.
    ///
    /// The read contract defines no status besides 200 and 500, so every
    /// failure maps to 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Store(e) => {
                tracing::error!(code = self.code(), "Store error: {:?}", e);
            }
            AppError::Validation(msg) => {
                tracing::error!(code = self.code(), "Validation error: {}", msg);
            }
            AppError::Internal(msg) => {
                tracing::error!(code = self.code(), "Internal error: {}", msg);
            }
        }

        INTERNAL_ERROR_MESSAGE.to_string()
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Store(StoreError::from(err))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

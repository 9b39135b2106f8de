//! Unified error types for the parking rates API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `TimeParamError`: Caller supplied `start`/`end` query parameters
//! - `SeedError`: Reading the startup rate sheet
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Validation failures for the lookup query parameters
///
/// Display strings are part of the public API and are returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParamError {
    #[error("missing Url Param '{0}' ")]
    Missing(&'static str),

    #[error("Url param '{0}' has no value ")]
    Empty(&'static str),

    #[error("Url param '{0}' isn't as per ISO-8601 standard ")]
    InvalidFormat(&'static str),
}

/// Rate sheet loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read rate sheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse rate sheet: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    TimeParam(#[from] TimeParamError),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::TimeParam(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Seed(e) => {
                tracing::error!("Seed error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

//! Unified error types for the rideshare API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//! - `ConfigError`: Startup configuration errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::{FieldError, ValidationErrors};

/// The kind of record a lookup was addressed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Passenger,
    Driver,
    Trip,
}

impl Resource {
    /// Listing page a caller is sent back to when a record of this kind is missing
    pub fn fallback_path(&self) -> &'static str {
        match self {
            Resource::Passenger => "/passengers",
            Resource::Driver => "/drivers",
            Resource::Trip => "/trips",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Passenger => write!(f, "Passenger"),
            Resource::Driver => write!(f, "Driver"),
            Resource::Trip => write!(f, "Trip"),
        }
    }
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// `id` is kept as text so identifiers that never parsed can be reported too
    pub fn not_found(resource: Resource, id: impl ToString) -> Self {
        DomainError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Input failed validation; carries the submitted input so the client can re-render it
    #[error("Validation failed: {errors}")]
    Rejected {
        errors: ValidationErrors,
        input: serde_json::Value,
    },
}

impl AppError {
    /// Attach the submitted input to a validation failure, pass anything else through
    pub fn with_input<T: Serialize>(err: DomainError, input: &T) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Rejected {
                errors,
                input: serde_json::to_value(input).unwrap_or(serde_json::Value::Null),
            },
            other => AppError::Domain(other),
        }
    }

    /// A request body that could not be read as the expected shape.
    /// The raw JSON, when there was any, is echoed back like any other rejected input.
    pub fn malformed(message: impl Into<String>, input: serde_json::Value) -> Self {
        let message = message.into();
        tracing::debug!("Malformed request body: {}", message);
        AppError::Rejected {
            errors: ValidationErrors::single("body", &message),
            input,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            errors: Vec::new(),
            input: None,
        }
    }

    fn validation(errors: ValidationErrors, input: Option<serde_json::Value>) -> Self {
        Self {
            error: "Validation error".to_string(),
            errors: errors.into_vec(),
            input,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(DomainError::NotFound { resource, id }) => {
                tracing::debug!("{} {} not found, redirecting", resource, id);
                return Redirect::to(resource.fallback_path()).into_response();
            }
            AppError::Domain(DomainError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation(errors, None),
            ),
            AppError::Rejected { errors, input } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation(errors, Some(input)),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

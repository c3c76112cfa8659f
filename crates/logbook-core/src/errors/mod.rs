// ABOUTME: Unified error type, error codes, and HTTP error body for the Logbook platform
// ABOUTME: Every service operation returns AppResult so failures map to one status table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Unified Error Handling System
//!
//! All service operations return [`AppResult`]. Errors are terminal for the
//! current request: nothing in the core retries, and the HTTP boundary maps
//! the [`ErrorCode`] to a status without inspecting the message.

/// Storage-level errors produced by database providers
pub mod database;

pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    /// No bearer token was presented
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,
    /// The bearer token could not be verified
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,
    /// The caller does not own the requested resource
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied = 1004,

    // Validation (3000-3999)
    /// Malformed enum values, out-of-range numbers, blank names
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// The id does not resolve to any stored entity
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A unique constraint rejected the write
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// The storage backend failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::AuthRequired | Self::AuthInvalid => 401,
            // Deliberately distinct from 404: a foreign resource is reported as forbidden
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::ConfigError | Self::InternalError | Self::DatabaseError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::PermissionDenied => "Access denied",
            Self::InvalidInput => "Invalid input. Please provide valid data",
            Self::ResourceNotFound => "Resource not found",
            Self::ResourceAlreadyExists => "Duplicate entry found. Please provide a unique value",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Id of the resource the error concerns, if any
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the id of the resource the error concerns
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl fmt::Display) -> Self {
        self.resource_id = Some(resource_id.to_string());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Authentication required")
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Caller is not the owner of the resource
    #[must_use]
    pub fn unauthorized_access() -> Self {
        Self::new(
            ErrorCode::PermissionDenied,
            "You are not authorized to access this object. It does not belong to you",
        )
    }

    /// Resource not found, keyed by id
    pub fn not_found(resource: impl Into<String>, id: impl fmt::Display) -> Self {
        let resource = resource.into();
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{resource} not found. Id {id}"),
        )
        .with_resource_id(id)
    }

    /// Resource not found, for lookups that are not keyed by id
    pub fn not_found_matching(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Unique constraint violation on `resource`.`field`
    pub fn already_exists(resource: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!(
                "A {} with this {} already exists",
                resource.into(),
                field.into()
            ),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Short error title derived from the code
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Resource the error concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                error: error.code.description().to_owned(),
                message: error.message,
                resource_id: error.resource_id,
            },
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match error {
            DatabaseError::UniqueViolation { .. } => ErrorCode::ResourceAlreadyExists,
            DatabaseError::InvalidData { .. } => ErrorCode::InternalError,
            DatabaseError::QueryError { .. } | DatabaseError::ConnectionError(_) => {
                ErrorCode::DatabaseError
            }
        };
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "Request failed");
        } else {
            tracing::debug!(code = ?self.code, error = %self, "Request rejected");
        }
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

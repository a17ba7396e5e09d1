// ABOUTME: Unified error handling with error codes, HTTP status mapping and JSON error bodies
// ABOUTME: Defines AppError for transport concerns and ValidationError for rejected payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! # Unified Error Handling System
//!
//! Every failure the service can report to a client flows through [`AppError`].
//! The only domain failure is a [`ValidationError`]: computation over a valid
//! payload cannot fail.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3004,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 413 Payload Too Large
            Self::PayloadTooLarge => 413,

            // 422 Unprocessable Entity
            Self::MissingRequiredField | Self::InvalidFormat | Self::ValueOutOfRange => 422,

            // 500 Internal Server Error
            Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::PayloadTooLarge => "The request body exceeds the configured size limit",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Which rule a rejected payload broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Body is not a JSON document of the expected shape
    Malformed,
    /// A required field is absent or null
    Missing,
    /// A field holds a JSON value of the wrong type
    WrongType,
    /// A numeric field lies outside its permitted range
    OutOfRange,
}

/// A rejected request payload, naming the offending field and the violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Violated rule category
    pub kind: ValidationKind,
    /// Path of the offending field, e.g. `recent_metrics[2].heart_rate`
    pub field: String,
    /// Human-readable description of the constraint
    pub constraint: String,
}

impl ValidationError {
    /// Body could not be interpreted as the expected JSON object
    pub fn malformed(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            kind: ValidationKind::Malformed,
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Required field absent
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            kind: ValidationKind::Missing,
            field: field.into(),
            constraint: "field required".into(),
        }
    }

    /// Field present with the wrong JSON type
    pub fn wrong_type(field: impl Into<String>, expected: &str) -> Self {
        Self {
            kind: ValidationKind::WrongType,
            field: field.into(),
            constraint: format!("must be {expected}"),
        }
    }

    /// Numeric field outside its range
    pub fn out_of_range(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            kind: ValidationKind::OutOfRange,
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Error code used when reporting this failure over HTTP
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self.kind {
            ValidationKind::Malformed => ErrorCode::InvalidInput,
            ValidationKind::Missing => ErrorCode::MissingRequiredField,
            ValidationKind::WrongType => ErrorCode::InvalidFormat,
            ValidationKind::OutOfRange => ErrorCode::ValueOutOfRange,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing, filled in by the HTTP layer when known
    pub request_id: Option<String>,
    /// Additional structured context
    pub details: Value,
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
            request_id: None,
            details: Value::Null,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
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

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Request body over the configured limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    /// Configuration value present but unusable
    pub fn invalid_config(variable: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid value '{value}' for {variable}: {}", reason.into()),
        )
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code(), error.to_string()).with_details(json!({
            "field": error.field,
            "constraint": error.constraint,
        }))
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
    /// Human-readable message
    pub message: String,
    /// Request ID for correlation with server logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Structured details (field and constraint for validation failures)
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
                details: error.details,
            },
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(code = ?self.code, error = %self, "Request failed");
            } else {
                tracing::debug!(code = ?self.code, error = %self, "Request rejected");
            }

            (status, Json(ErrorResponse::from(self))).into_response()
        }
    }
}

//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in RawConnect                             │
//! │                                                                         │
//! │  "submit"                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Response, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input line? ───────── ApiError::parse ──────────────┐      │  │
//! │  │         │                                                │      │  │
//! │  │         ▼                                                ▼      │  │
//! │  │  Wrong tab? ────────────── ApiError::view_not_active ── ApiError►│  │
//! │  │         │                                                ▲      │  │
//! │  │         ▼                                                │      │  │
//! │  │  Domain failure? ───────── CoreError ────────────────────┘      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"error": {"code": "VALIDATION_ERROR",                                 │
//! │             "message": "Please fill in all required fields"}}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rawconnect_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Supplier not found: 9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Supplier or offer not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Command belongs to a view that is not on screen
    ViewNotActive,

    /// Input line could not be understood
    ParseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a wrong-tab error.
    pub fn view_not_active(view: &str) -> Self {
        ApiError::new(
            ErrorCode::ViewNotActive,
            format!("Switch to the {} tab first", view),
        )
    }

    /// Creates an input parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ParseError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::SupplierNotFound(id) => ApiError::not_found("Supplier", &id.to_string()),
            CoreError::OfferNotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::UnknownStatus(_) => ApiError::parse(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts form validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

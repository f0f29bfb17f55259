//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Marza                                  │
//! │                                                                         │
//! │  Numeric input ──────► clamped, never an error                          │
//! │                                                                         │
//! │  Unknown theme/accent/key/target ──► CoreError ──┐                      │
//! │                                                  ├──► ApiError          │
//! │  Terminal I/O, JSON output ──────────────────────┘     │                │
//! │                                                        ▼                │
//! │                                                  stderr + exit 1        │
//! │                                                                         │
//! │  Settings file failure ──► logged at debug, defaults used               │
//! │  Clipboard/opener failure ──► error Notification                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` carries a machine-readable `code` and a human-readable
//! `message`; only the message is printed.

use serde::Serialize;
use std::fmt;

use marza_core::CoreError;

/// Error returned from terminal commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Unknown theme 'blue', expected one of: dark, light"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A name (theme, accent, setting key, share target, command) was not recognised
    ValidationError,

    /// Terminal I/O or anything else unexpected
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownVariant { .. } => ApiError::validation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("Terminal I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("JSON output failed: {}", err))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

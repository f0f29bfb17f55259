//! # Store Error Types
//!
//! Error types for settings persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SettingsStore::set ← logs at DEBUG and carries on in memory           │
//! │                                                                         │
//! │  The user never sees a StoreError.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Settings backend errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the settings file failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Settings I/O failed: {0}")]
    Io(String),

    /// The settings file exists but is not a JSON object.
    #[error("Settings file is corrupt: {0}")]
    Serialization(String),

    /// The backend refuses all access (e.g. storage disabled).
    #[error("Settings storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for settings backend operations.
pub type StoreResult<T> = Result<T, StoreError>;

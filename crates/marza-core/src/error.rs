//! # Error Types
//!
//! Domain-specific error types for marza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  marza-core errors (this file)                                         │
//! │  └── CoreError        - Unknown enumerated values (theme, accent, ...) │
//! │                                                                         │
//! │  marza-store errors (separate crate)                                   │
//! │  └── StoreError       - Persistence failures, logged and swallowed     │
//! │                                                                         │
//! │  front-end errors (in app)                                             │
//! │  └── ApiError         - What the user sees                             │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → terminal                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! Numeric input is never rejected. Out-of-range, negative, empty or
//! non-finite numbers are clamped by [`crate::validation::clamp`], so the
//! pricing engine has no error type at all.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any variant of an enumerated setting.
    ///
    /// ## When This Occurs
    /// - `ThemeMode::from_str("blue")`
    /// - `ShareTarget::from_str("fax")`
    /// - `SettingKey::from_str("markupPct")` (the old percentage schema)
    #[error("Unknown {field} '{value}', expected one of: {}", .allowed.join(", "))]
    UnknownVariant {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl CoreError {
    /// Creates an UnknownVariant error.
    pub fn unknown(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        CoreError::UnknownVariant {
            field,
            value: value.into(),
            allowed,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

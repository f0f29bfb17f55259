//! # Validation Module
//!
//! Input sanitization for Marza.
//!
//! ## Sanitization Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Clamp, Never Reject                                │
//! │                                                                         │
//! │  User types into a field                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_input("13,2") ──► 13.2     (comma decimals, spaces tolerated)   │
//! │  parse_input("abc")  ──► NaN                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clamp(value, range)                                                   │
//! │  ├── NaN / ±inf      → 0, then clamped                                 │
//! │  ├── below range.min → range.min                                       │
//! │  ├── above range.max → range.max                                       │
//! │  └── otherwise       → unchanged                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  engine::compute (never sees a bad number)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use marza_core::validation::{clamp, parse_input, COMMISSION_PCT_RANGE};
//!
//! assert_eq!(clamp(150.0, COMMISSION_PCT_RANGE), 100.0);
//! assert_eq!(clamp(f64::NAN, COMMISSION_PCT_RANGE), 0.0);
//! assert_eq!(clamp(parse_input("12,5"), COMMISSION_PCT_RANGE), 12.5);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Field Ranges
// =============================================================================

/// A closed numeric range `[min, max]` an input field is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    /// Creates a range. `min` must not exceed `max`.
    pub const fn new(min: f64, max: f64) -> Self {
        FieldRange { min, max }
    }

    /// Checks if a value already lies inside the range.
    ///
    /// Non-finite values are never inside.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Base price in foreign currency.
pub const BASE_FOREIGN_RANGE: FieldRange = FieldRange::new(0.0, 10_000_000.0);

/// Foreign-to-local exchange rate.
pub const EXCHANGE_RATE_RANGE: FieldRange = FieldRange::new(0.0, 10_000.0);

/// Flat logistics cost in local currency.
pub const LOGISTICS_RANGE: FieldRange = FieldRange::new(0.0, 10_000_000.0);

/// Commission in percent of the converted base.
pub const COMMISSION_PCT_RANGE: FieldRange = FieldRange::new(0.0, 100.0);

/// Flat markup in local currency.
pub const MARKUP_LOCAL_RANGE: FieldRange = FieldRange::new(0.0, 10_000_000.0);

// =============================================================================
// Clamp
// =============================================================================

/// Constrains `value` to `range`, substituting 0 for non-finite values.
///
/// ## Example
/// ```rust
/// use marza_core::validation::{clamp, EXCHANGE_RATE_RANGE};
///
/// assert_eq!(clamp(13.2, EXCHANGE_RATE_RANGE), 13.2);
/// assert_eq!(clamp(-5.0, EXCHANGE_RATE_RANGE), 0.0);
/// assert_eq!(clamp(1e9, EXCHANGE_RATE_RANGE), 10_000.0);
/// assert_eq!(clamp(f64::INFINITY, EXCHANGE_RATE_RANGE), 0.0);
/// ```
pub fn clamp(value: f64, range: FieldRange) -> f64 {
    let value = if value.is_finite() { value } else { 0.0 };

    // -0.0 would survive `max(0.0)` and print as "-0"
    if value == 0.0 && range.contains(0.0) {
        return 0.0;
    }

    value.max(range.min).min(range.max)
}

// =============================================================================
// Text Input
// =============================================================================

/// Parses a number the way a user types it.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Inner spaces and no-break spaces are dropped ("10 000")
/// - A decimal comma is accepted ("13,2")
/// - Empty or unparseable text yields `NaN`, which [`clamp`] maps to 0
pub fn parse_input(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}' | '_'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return f64::NAN;
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range_is_identity() {
        assert_eq!(clamp(0.0, COMMISSION_PCT_RANGE), 0.0);
        assert_eq!(clamp(12.5, COMMISSION_PCT_RANGE), 12.5);
        assert_eq!(clamp(100.0, COMMISSION_PCT_RANGE), 100.0);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp(-1.0, COMMISSION_PCT_RANGE), 0.0);
        assert_eq!(clamp(100.01, COMMISSION_PCT_RANGE), 100.0);
        assert_eq!(clamp(20_000.0, EXCHANGE_RATE_RANGE), 10_000.0);
        assert_eq!(clamp(f64::MAX, BASE_FOREIGN_RANGE), 10_000_000.0);
    }

    #[test]
    fn test_clamp_non_finite_is_zero() {
        assert_eq!(clamp(f64::NAN, LOGISTICS_RANGE), 0.0);
        assert_eq!(clamp(f64::INFINITY, LOGISTICS_RANGE), 0.0);
        assert_eq!(clamp(f64::NEG_INFINITY, LOGISTICS_RANGE), 0.0);
    }

    #[test]
    fn test_clamp_negative_zero() {
        let clamped = clamp(-0.0, MARKUP_LOCAL_RANGE);
        assert_eq!(clamped, 0.0);
        assert!(clamped.is_sign_positive());
    }

    #[test]
    fn test_range_contains() {
        assert!(EXCHANGE_RATE_RANGE.contains(13.2));
        assert!(!EXCHANGE_RATE_RANGE.contains(-0.1));
        assert!(!EXCHANGE_RATE_RANGE.contains(f64::NAN));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("400"), 400.0);
        assert_eq!(parse_input("  13.2 "), 13.2);
        assert_eq!(parse_input("13,2"), 13.2);
        assert_eq!(parse_input("10 000"), 10_000.0);
        assert_eq!(parse_input("10\u{a0}000"), 10_000.0);
        assert!(parse_input("").is_nan());
        assert!(parse_input("abc").is_nan());
    }

    #[test]
    fn test_garbage_input_clamps_to_zero() {
        assert_eq!(clamp(parse_input("abc"), BASE_FOREIGN_RANGE), 0.0);
        assert_eq!(clamp(parse_input(""), BASE_FOREIGN_RANGE), 0.0);
    }
}

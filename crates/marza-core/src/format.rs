//! # Formatting
//!
//! Currency formatters and the plain-text summary shared by "copy" and
//! "share".
//!
//! ## The Two Formatters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Local (RUB, ru-RU style)            Foreign (CNY, zh-CN style)         │
//! │  ────────────────────────            ──────────────────────────         │
//! │  whole roubles, no kopecks           two fractional digits             │
//! │  groups split by U+00A0              groups split by ','               │
//! │  symbol after: "8 308 ₽"             symbol before: "¥1,234.50"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens here and only here; the breakdown itself stays exact.

use crate::types::{Currency, PricingBreakdown, PricingInputs};

/// No-break space used by the ru-RU grouping and before the ₽ sign.
pub const NBSP: char = '\u{a0}';

// =============================================================================
// Currency Formatters
// =============================================================================

/// Formats a local-currency amount: rounded to whole units.
///
/// ## Example
/// ```rust
/// use marza_core::format::format_local;
///
/// assert_eq!(format_local(8308.0), "8\u{a0}308\u{a0}₽");
/// assert_eq!(format_local(527.5), "528\u{a0}₽");
/// ```
pub fn format_local(amount: f64) -> String {
    let currency = Currency::Rub;
    let (negative, digits) = fixed_digits(amount, currency.display_decimals());
    format!(
        "{}{}{}{}",
        if negative { "-" } else { "" },
        group_thousands(&digits, NBSP),
        NBSP,
        currency.symbol()
    )
}

/// Formats a foreign-currency amount: two fractional digits.
///
/// ## Example
/// ```rust
/// use marza_core::format::format_foreign;
///
/// assert_eq!(format_foreign(400.0), "¥400.00");
/// assert_eq!(format_foreign(1234.5), "¥1,234.50");
/// ```
pub fn format_foreign(amount: f64) -> String {
    let currency = Currency::Cny;
    let (negative, digits) = fixed_digits(amount, currency.display_decimals());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());
    out.push_str(&group_thousands(whole, ','));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Formats a percentage with a fixed number of fractional digits.
///
/// ```rust
/// use marza_core::format::format_percent;
///
/// assert_eq!(format_percent(22.0329, 1), "22.0%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    let (negative, digits) = fixed_digits(value, decimals);
    format!("{}{}%", if negative { "-" } else { "" }, digits)
}

/// Formats a plain number with at most `max_decimals` fractional digits,
/// trailing zeros trimmed ("13.2", "10", "7.25").
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let (negative, digits) = fixed_digits(value, max_decimals);
    let trimmed = if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits.as_str()
    };
    format!("{}{}", if negative { "-" } else { "" }, trimmed)
}

/// Renders `|value|` with `decimals` fractional digits and reports the sign.
///
/// Halves round away from zero (0.5 → 1). Non-finite values render as zero;
/// a value that rounds to zero is never reported as negative.
fn fixed_digits(value: f64, decimals: usize) -> (bool, String) {
    let value = if value.is_finite() { value } else { 0.0 };
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let digits = format!("{:.*}", decimals, rounded);
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    (value < 0.0 && !is_zero, digits)
}

/// Inserts `separator` between groups of three digits, counted from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Summary
// =============================================================================

/// Builds the multi-line summary used for clipboard copy and share links.
///
/// The inputs are shown as the engine saw them (clamped).
///
/// ## Example Output
/// ```text
/// Price calculation
/// Base price: ¥400.00
/// Converted at 13.2: 5 280 ₽
/// Logistics: 1 000 ₽
/// Commission (10%): 528 ₽
/// Cost: 6 808 ₽
/// Markup (22.0%): 1 500 ₽
/// Profit: 1 500 ₽
/// Final price: 8 308 ₽
/// ```
pub fn format_summary(inputs: &PricingInputs, breakdown: &PricingBreakdown) -> String {
    let inputs = inputs.sanitized();

    [
        "Price calculation".to_string(),
        format!("Base price: {}", format_foreign(inputs.base_foreign)),
        format!(
            "Converted at {}: {}",
            format_decimal(inputs.exchange_rate, 4),
            format_local(breakdown.converted_base)
        ),
        format!("Logistics: {}", format_local(inputs.logistics)),
        format!(
            "Commission ({}%): {}",
            format_decimal(inputs.commission_pct, 2),
            format_local(breakdown.commission_amount)
        ),
        format!("Cost: {}", format_local(breakdown.cost)),
        format!(
            "Markup ({}): {}",
            format_percent(breakdown.markup_pct_of_cost, 1),
            format_local(breakdown.markup)
        ),
        format!("Profit: {}", format_local(breakdown.profit)),
        format!("Final price: {}", format_local(breakdown.final_price)),
    ]
    .join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

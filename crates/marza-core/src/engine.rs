//! # Pricing Engine
//!
//! Maps five inputs to a full price breakdown.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingInputs (sanitized first)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  converted_base    = base_foreign × exchange_rate                      │
//! │  commission_amount = converted_base × commission_pct / 100             │
//! │  cost              = converted_base + logistics + commission_amount    │
//! │  markup            = markup_local                                      │
//! │  final_price       = cost + markup                                     │
//! │  markup_pct        = markup / cost × 100, or 0 if not finite           │
//! │  profit            = markup                                            │
//! │                                                                         │
//! │  Example: ¥400 @ 13.2, logistics 1 000 ₽, 10%, markup 1 500 ₽          │
//! │    converted 5 280 ₽ → commission 528 ₽ → cost 6 808 ₽                 │
//! │    → final 8 308 ₽ (markup ≈ 22.0% of cost)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Floating Point
//! The breakdown is kept in `f64` and never rounded, so recomputing from the
//! same inputs is bit-identical. `profit` is taken from `markup` directly:
//! `(cost + markup) - cost` can drift by one ulp, `markup` cannot.

use crate::types::{PricingBreakdown, PricingInputs};

/// Computes the price breakdown.
///
/// Pure, total and deterministic. Inputs are clamped before use, so any
/// `f64` (negative, huge, NaN, infinite) is accepted.
///
/// ## Example
/// ```rust
/// use marza_core::{compute, PricingInputs};
///
/// let breakdown = compute(PricingInputs {
///     base_foreign: 400.0,
///     exchange_rate: 13.2,
///     logistics: 1000.0,
///     commission_pct: 10.0,
///     markup_local: 0.0,
/// });
///
/// assert_eq!(breakdown.converted_base, 5280.0);
/// assert_eq!(breakdown.commission_amount, 528.0);
/// assert_eq!(breakdown.cost, 6808.0);
/// assert_eq!(breakdown.markup_pct_of_cost, 0.0);
/// ```
pub fn compute(inputs: PricingInputs) -> PricingBreakdown {
    let inputs = inputs.sanitized();

    let converted_base = inputs.base_foreign * inputs.exchange_rate;
    let commission_amount = converted_base * inputs.commission_pct / 100.0;
    let cost = converted_base + inputs.logistics + commission_amount;
    let markup = inputs.markup_local;
    let final_price = cost + markup;

    // A subnormal cost can overflow the ratio
    let ratio = markup / cost * 100.0;
    let markup_pct_of_cost = if cost > 0.0 && ratio.is_finite() {
        ratio
    } else {
        0.0
    };

    PricingBreakdown {
        converted_base,
        commission_amount,
        cost,
        markup,
        final_price,
        markup_pct_of_cost,
        profit: markup,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # marza-core: Pure Pricing Logic for Marza
//!
//! This crate is the **heart** of Marza. It turns a foreign base price,
//! an exchange rate, logistics, a commission percentage and a flat markup
//! into a full local-currency price breakdown, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Marza Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal front-end (apps/cli)                  │   │
//! │  │    quote ──► summary ──► copy ──► share ──► interactive         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ marza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │  format   │  │ validation│  │   │
//! │  │   │  Inputs   │  │  compute  │  │  ₽ / ¥    │  │   clamp   │  │   │
//! │  │   │ Breakdown │  │           │  │  summary  │  │  ranges   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLIPBOARD • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 marza-store (Settings Store)                    │   │
//! │  │            rate, commission, markupRub, theme, accent           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PricingInputs, PricingBreakdown, ThemeMode, ...)
//! - [`engine`] - The pricing engine (`compute`)
//! - [`validation`] - Field ranges and the clamp used to sanitize inputs
//! - [`format`] - Currency formatters and the shareable summary text
//! - [`share`] - Outbound share-link construction
//! - [`tween`] - Easing for the animated final-price figure
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, bit for bit
//! 2. **Total**: the engine never fails; bad input is clamped, not rejected
//! 3. **Round Late**: breakdown values are never rounded, only their display
//!
//! ## Example Usage
//!
//! ```rust
//! use marza_core::{compute, PricingInputs};
//!
//! let inputs = PricingInputs {
//!     base_foreign: 400.0,
//!     exchange_rate: 13.2,
//!     logistics: 1000.0,
//!     commission_pct: 10.0,
//!     markup_local: 1500.0,
//! };
//!
//! let breakdown = compute(inputs);
//! assert_eq!(breakdown.cost, 6808.0);
//! assert_eq!(breakdown.final_price, 8308.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod format;
pub mod share;
pub mod tween;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::compute;
pub use error::{CoreError, CoreResult};
pub use format::format_summary;
pub use share::{share_url, ShareTarget};
pub use tween::PriceTween;
pub use types::*;
pub use validation::{clamp, FieldRange};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default source-to-local exchange rate (CNY → RUB).
pub const DEFAULT_EXCHANGE_RATE: f64 = 13.2;

/// Default intermediary commission, in percent of the converted base.
pub const DEFAULT_COMMISSION_PCT: f64 = 10.0;

/// Default flat markup, in local currency.
pub const DEFAULT_MARKUP_LOCAL: f64 = 0.0;

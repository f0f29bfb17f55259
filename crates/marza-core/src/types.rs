//! # Domain Types
//!
//! Core domain types used throughout Marza.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  compute()  ┌──────────────────────┐              │
//! │  │  PricingInputs  │ ──────────► │  PricingBreakdown    │              │
//! │  │  ─────────────  │             │  ──────────────────  │              │
//! │  │  base_foreign   │             │  converted_base      │              │
//! │  │  exchange_rate  │             │  commission_amount   │              │
//! │  │  logistics      │             │  cost                │              │
//! │  │  commission_pct │             │  markup              │              │
//! │  │  markup_local   │             │  final_price         │              │
//! │  └─────────────────┘             │  markup_pct_of_cost  │              │
//! │                                  │  profit              │              │
//! │                                  └──────────────────────┘              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   InputField    │   │    ThemeMode    │   │  AccentChoice   │       │
//! │  │  range + key    │   │  Dark | Light   │   │  Green | Red    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{
    clamp, FieldRange, BASE_FOREIGN_RANGE, COMMISSION_PCT_RANGE, EXCHANGE_RATE_RANGE,
    LOGISTICS_RANGE, MARKUP_LOCAL_RANGE,
};

// =============================================================================
// Pricing Inputs
// =============================================================================

/// The five numbers a price is built from.
///
/// Values may be anything a user typed; [`PricingInputs::sanitized`] is
/// applied by the engine before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInputs {
    /// Base price in foreign currency (CNY).
    pub base_foreign: f64,

    /// How many local units one foreign unit buys.
    pub exchange_rate: f64,

    /// Flat shipping/logistics cost, local currency.
    pub logistics: f64,

    /// Intermediary commission, percent of the converted base.
    pub commission_pct: f64,

    /// Flat markup added on top of cost, local currency.
    pub markup_local: f64,
}

impl PricingInputs {
    /// Returns a copy with every field clamped to its [`InputField`] range.
    pub fn sanitized(&self) -> Self {
        PricingInputs {
            base_foreign: clamp(self.base_foreign, BASE_FOREIGN_RANGE),
            exchange_rate: clamp(self.exchange_rate, EXCHANGE_RATE_RANGE),
            logistics: clamp(self.logistics, LOGISTICS_RANGE),
            commission_pct: clamp(self.commission_pct, COMMISSION_PCT_RANGE),
            markup_local: clamp(self.markup_local, MARKUP_LOCAL_RANGE),
        }
    }

    /// Reads one field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::BaseForeign => self.base_foreign,
            InputField::ExchangeRate => self.exchange_rate,
            InputField::Logistics => self.logistics,
            InputField::CommissionPct => self.commission_pct,
            InputField::MarkupLocal => self.markup_local,
        }
    }

    /// Writes one field, clamped to that field's range.
    pub fn set(&mut self, field: InputField, value: f64) {
        let value = clamp(value, field.range());
        match field {
            InputField::BaseForeign => self.base_foreign = value,
            InputField::ExchangeRate => self.exchange_rate = value,
            InputField::Logistics => self.logistics = value,
            InputField::CommissionPct => self.commission_pct = value,
            InputField::MarkupLocal => self.markup_local = value,
        }
    }
}

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// Everything derived from a [`PricingInputs`].
///
/// ## Invariants
/// - All fields are finite and non-negative
/// - `final_price == cost + markup`
/// - `profit == markup`
/// - Nothing here is rounded; rounding is a display concern
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub converted_base: f64,
    pub commission_amount: f64,
    pub cost: f64,
    pub markup: f64,
    pub final_price: f64,
    /// Markup as a percentage of cost (display only). 0 when cost is 0 or
    /// so small that the ratio overflows.
    pub markup_pct_of_cost: f64,
    pub profit: f64,
}

// =============================================================================
// Input Field
// =============================================================================

/// One editable input of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    BaseForeign,
    ExchangeRate,
    Logistics,
    CommissionPct,
    MarkupLocal,
}

impl InputField {
    /// Every field, in display order.
    pub const ALL: [InputField; 5] = [
        InputField::BaseForeign,
        InputField::ExchangeRate,
        InputField::Logistics,
        InputField::CommissionPct,
        InputField::MarkupLocal,
    ];

    /// The closed range this field is clamped into.
    pub const fn range(&self) -> FieldRange {
        match self {
            InputField::BaseForeign => BASE_FOREIGN_RANGE,
            InputField::ExchangeRate => EXCHANGE_RATE_RANGE,
            InputField::Logistics => LOGISTICS_RANGE,
            InputField::CommissionPct => COMMISSION_PCT_RANGE,
            InputField::MarkupLocal => MARKUP_LOCAL_RANGE,
        }
    }

    /// Whether edits to this field survive a restart.
    ///
    /// Base price and logistics are per-product and start blank each session.
    pub const fn is_persisted(&self) -> bool {
        matches!(
            self,
            InputField::ExchangeRate | InputField::CommissionPct | InputField::MarkupLocal
        )
    }

    /// Short name used by the interactive session.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InputField::BaseForeign => "base",
            InputField::ExchangeRate => "rate",
            InputField::Logistics => "logistics",
            InputField::CommissionPct => "commission",
            InputField::MarkupLocal => "markup",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALLOWED: &[&str] = &["base", "rate", "logistics", "commission", "markup"];
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(InputField::BaseForeign),
            "rate" => Ok(InputField::ExchangeRate),
            "logistics" => Ok(InputField::Logistics),
            "commission" => Ok(InputField::CommissionPct),
            "markup" => Ok(InputField::MarkupLocal),
            _ => Err(CoreError::unknown("field", s, ALLOWED)),
        }
    }
}

// =============================================================================
// Theme & Accent
// =============================================================================

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    const ALLOWED: &'static [&'static str] = &["dark", "light"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// The other mode.
    pub const fn toggle(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(CoreError::unknown("theme", s, Self::ALLOWED)),
        }
    }
}

/// Highlight colour of the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentChoice {
    #[default]
    Green,
    Red,
}

impl AccentChoice {
    const ALLOWED: &'static [&'static str] = &["green", "red"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccentChoice::Green => "green",
            AccentChoice::Red => "red",
        }
    }

    /// The other accent.
    pub const fn toggle(&self) -> Self {
        match self {
            AccentChoice::Green => AccentChoice::Red,
            AccentChoice::Red => AccentChoice::Green,
        }
    }
}

impl fmt::Display for AccentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccentChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(AccentChoice::Green),
            "red" => Ok(AccentChoice::Red),
            _ => Err(CoreError::unknown("accent", s, Self::ALLOWED)),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// The two currencies Marza knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Foreign (source) currency: Chinese yuan.
    Cny,
    /// Local currency: Russian rouble.
    Rub,
}

impl Currency {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Cny => "¥",
            Currency::Rub => "₽",
        }
    }

    /// Fractional digits shown when formatting.
    pub const fn display_decimals(&self) -> usize {
        match self {
            Currency::Cny => 2,
            Currency::Rub => 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

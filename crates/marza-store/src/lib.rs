//! # marza-store: Settings Store for Marza
//!
//! This crate remembers the calculator's adjustable settings across
//! sessions: exchange rate, commission, markup, theme and accent.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Marza Settings Flow                              │
//! │                                                                         │
//! │  CalculatorState::set_exchange_rate(14.0)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   marza-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │ SettingsStore │    │ SettingsBackend│    │ StoreConfig  │  │   │
//! │  │   │ (settings.rs) │───►│  (backend.rs)  │    │ dir + name   │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ typed get/set │    │ JsonFileBackend│    │ marza.json   │  │   │
//! │  │   │ defaults      │    │ MemoryBackend  │    │ or memory    │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/marza/marza.json                                       │
//! │  { "rate": "14", "commission": "10", "markupRub": "0", ... }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use marza_store::{SettingsStore, StoreConfig};
//!
//! let mut store = SettingsStore::open(&StoreConfig::in_memory());
//! assert_eq!(store.exchange_rate(), 13.2);
//!
//! store.set_exchange_rate(14.0);
//! assert_eq!(store.exchange_rate(), 14.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod settings;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{JsonFileBackend, MemoryBackend, SettingsBackend, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use settings::{SettingKey, Settings, SettingsStore};

//! # State Module
//!
//! Application state for the terminal front-end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │ CalculatorState  │  │    AppConfig     │  │    Notification      │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  inputs          │  │  data_dir        │  │  kind + message      │  │
//! │  │  breakdown       │  │  namespace       │  │  expires after 1.8s  │  │
//! │  │  SettingsStore   │  │  ephemeral       │  │                      │  │
//! │  │                  │  │  animate         │  │                      │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  One session owns one CalculatorState; no globals, no locking.         │
//! │  AppConfig is read-only after startup.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;
mod notification;

pub use calculator::CalculatorState;
pub use config::{AppConfig, ENV_DATA_DIR, ENV_NAMESPACE, ENV_NO_ANIMATE};
pub use notification::{Notification, NotificationKind, TOAST_DURATION_MS};

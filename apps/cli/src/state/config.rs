//! # Configuration State
//!
//! Application configuration resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--data-dir`, `--ephemeral`, `--no-animate`)
//! 2. Environment variables (`MARZA_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Serialize;

use marza_store::backend::DEFAULT_NAMESPACE;
use marza_store::StoreConfig;

use crate::cli::GlobalArgs;

/// Directory override for the settings file.
pub const ENV_DATA_DIR: &str = "MARZA_DATA_DIR";

/// Namespace (file name) override.
pub const ENV_NAMESPACE: &str = "MARZA_NAMESPACE";

/// Any non-empty value other than "0"/"false" disables the price animation.
pub const ENV_NO_ANIMATE: &str = "MARZA_NO_ANIMATE";

/// Application configuration.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory holding `<namespace>.json`.
    /// Default: platform app-data dir (e.g. `~/.local/share/marza`)
    pub data_dir: PathBuf,

    /// Settings namespace.
    /// Default: "marza"
    pub namespace: String,

    /// Keep settings in memory only.
    pub ephemeral: bool,

    /// Animate the final price when it changes.
    pub animate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            ephemeral: false,
            animate: true,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(ns) = lookup(ENV_NAMESPACE).filter(|v| !v.trim().is_empty()) {
            config.namespace = ns.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_NO_ANIMATE) {
            if is_truthy(&flag) {
                config.animate = false;
            }
        }

        config
    }

    /// Applies command line flags on top.
    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if args.ephemeral {
            self.ephemeral = true;
        }
        if args.no_animate {
            self.animate = false;
        }
        self
    }

    /// The settings store configuration this app config describes.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.data_dir.clone())
            .namespace(self.namespace.clone())
            .ephemeral(self.ephemeral)
    }
}

/// Platform-specific data directory.
///
/// - **macOS**: `~/Library/Application Support/com.marza.pricing`
/// - **Windows**: `%APPDATA%\marza\pricing\data`
/// - **Linux**: `~/.local/share/pricing`
///
/// Falls back to the working directory when no home directory is known.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "marza", "pricing")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

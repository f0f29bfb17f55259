//! # Settings Backends
//!
//! Where settings physically live.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Settings Backends                                  │
//! │                                                                         │
//! │  StoreConfig::new(dir) ← Configure location and namespace              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  config.open_backend()                                                 │
//! │       │                                                                 │
//! │       ├── ephemeral = false ──► JsonFileBackend(<dir>/<namespace>.json)│
//! │       │                                                                 │
//! │       └── ephemeral = true  ──► MemoryBackend (lost on exit)           │
//! │                                                                         │
//! │  Both implement SettingsBackend:                                       │
//! │    read(key)         -> Option<String>   (None = never written)        │
//! │    write(key, value) -> ()               (synchronous, durable)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! A single JSON object mapping storage keys to string values, rewritten
//! whole on every write (temp file + rename, so a crash mid-write leaves the
//! previous file intact).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Default namespace; the settings file is `<dir>/marza.json`.
pub const DEFAULT_NAMESPACE: &str = "marza";

// =============================================================================
// Configuration
// =============================================================================

/// Settings store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/home/me/.local/share/marza")
///     .namespace("marza");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the settings file.
    pub directory: PathBuf,

    /// Namespace all keys live under; names the file.
    /// Default: "marza"
    pub namespace: String,

    /// Keep settings in memory only.
    /// Default: false
    pub ephemeral: bool,
}

impl StoreConfig {
    /// Creates a file-backed configuration in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        StoreConfig {
            directory: directory.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            ephemeral: false,
        }
    }

    /// Sets the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets whether settings are kept in memory only.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Creates an in-memory configuration (for testing and `--ephemeral`).
    pub fn in_memory() -> Self {
        StoreConfig::new(PathBuf::new()).ephemeral(true)
    }

    /// Path of the settings file for this configuration.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(format!("{}.json", self.namespace))
    }

    /// Opens the backend this configuration describes.
    pub fn open_backend(&self) -> Arc<dyn SettingsBackend> {
        if self.ephemeral {
            info!(namespace = %self.namespace, "Using in-memory settings");
            Arc::new(MemoryBackend::new())
        } else {
            let backend = JsonFileBackend::new(self.file_path());
            info!(path = %backend.path().display(), "Using settings file");
            Arc::new(backend)
        }
    }
}

// =============================================================================
// Backend Trait
// =============================================================================

/// A flat string key-value store.
///
/// Implementations must be synchronous: when `write` returns `Ok`, a later
/// `read` (in this or the next process) sees the value.
pub trait SettingsBackend: Send + Sync {
    /// Returns the raw stored string, or `None` if the key was never written.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// JSON File Backend
// =============================================================================

/// Settings kept in one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole file. A missing file is an empty map.
    fn load(&self) -> StoreResult<BTreeMap<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Replaces the file with `entries`.
    fn store(&self, entries: &BTreeMap<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsBackend for JsonFileBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.load()?;
        Ok(entries.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            // Hand-edited files may hold bare numbers
            other => other.to_string(),
        }))
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        // A corrupt file is replaced rather than blocking every future write
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StoreError::Serialization(reason)) => {
                debug!(%reason, "Overwriting corrupt settings file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };

        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.store(&entries)?;
        debug!(key, value, "Setting written");
        Ok(())
    }
}

// =============================================================================
// Memory Backend
// =============================================================================

/// Settings kept in process memory only.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Creates a backend pre-filled with raw entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MemoryBackend {
            entries: Mutex::new(map),
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Settings Store
//!
//! Typed accessors over a [`SettingsBackend`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Settings Lifecycle                                   │
//! │                                                                         │
//! │  startup                                                               │
//! │    SettingsStore::load(backend)                                        │
//! │      for each key: read ─► decode ─► value                             │
//! │                      │        │                                         │
//! │                      │        └─ unparseable / non-finite ─► default   │
//! │                      └─ missing or backend error ─────────► default    │
//! │                                                                         │
//! │  every edit                                                            │
//! │    set_exchange_rate(v)                                                │
//! │      clamp ─► in-memory value ─► backend.write("rate", "…")            │
//! │                                        │                                │
//! │                                        └─ Err ─► DEBUG log, keep going │
//! │                                                                         │
//! │  never: delete, migrate                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Keys
//!
//! | key          | value                | default |
//! |--------------|----------------------|---------|
//! | `rate`       | exchange rate        | 13.2    |
//! | `commission` | commission percent   | 10      |
//! | `markupRub`  | flat markup, roubles | 0       |
//! | `theme`      | `dark` / `light`     | dark    |
//! | `accent`     | `green` / `red`      | green   |
//!
//! Older builds stored the markup as a percentage. Whatever `markupRub`
//! holds is read as a rouble amount; there is no migration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use marza_core::validation::{
    clamp, parse_input, FieldRange, COMMISSION_PCT_RANGE, EXCHANGE_RATE_RANGE,
    MARKUP_LOCAL_RANGE,
};
use marza_core::{
    AccentChoice, CoreError, CoreResult, ThemeMode, DEFAULT_COMMISSION_PCT,
    DEFAULT_EXCHANGE_RATE, DEFAULT_MARKUP_LOCAL,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::{SettingsBackend, StoreConfig};

// =============================================================================
// Keys
// =============================================================================

/// A persisted setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Rate,
    Commission,
    MarkupRub,
    Theme,
    Accent,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::Rate,
        SettingKey::Commission,
        SettingKey::MarkupRub,
        SettingKey::Theme,
        SettingKey::Accent,
    ];

    const ALLOWED: &'static [&'static str] = &["rate", "commission", "markupRub", "theme", "accent"];

    /// The fixed storage key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Rate => "rate",
            SettingKey::Commission => "commission",
            SettingKey::MarkupRub => "markupRub",
            SettingKey::Theme => "theme",
            SettingKey::Accent => "accent",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown("setting", s, Self::ALLOWED))
    }
}

// =============================================================================
// Settings Snapshot
// =============================================================================

/// The current value of every setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub exchange_rate: f64,
    pub commission_pct: f64,
    pub markup_local: f64,
    pub theme_mode: ThemeMode,
    pub accent_choice: AccentChoice,
}

impl Default for Settings {
    /// Values used when nothing (valid) is stored.
    fn default() -> Self {
        Settings {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            commission_pct: DEFAULT_COMMISSION_PCT,
            markup_local: DEFAULT_MARKUP_LOCAL,
            theme_mode: ThemeMode::Dark,
            accent_choice: AccentChoice::Green,
        }
    }
}

impl Settings {
    /// The string form of one setting, as it is written to the backend.
    pub fn encoded(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Rate => encode_number(self.exchange_rate),
            SettingKey::Commission => encode_number(self.commission_pct),
            SettingKey::MarkupRub => encode_number(self.markup_local),
            SettingKey::Theme => self.theme_mode.as_str().to_string(),
            SettingKey::Accent => self.accent_choice.as_str().to_string(),
        }
    }
}

// =============================================================================
// Settings Store
// =============================================================================

/// In-memory settings backed by a persistent [`SettingsBackend`].
///
/// Reads never touch the backend after [`SettingsStore::load`]; writes go
/// straight through. The in-memory value always wins for the running
/// session, even when the write failed.
pub struct SettingsStore {
    backend: Arc<dyn SettingsBackend>,
    values: Settings,
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl SettingsStore {
    /// Opens the backend described by `config` and loads from it.
    pub fn open(config: &StoreConfig) -> Self {
        SettingsStore::load(config.open_backend())
    }

    /// Reads every setting once, falling back to defaults.
    pub fn load(backend: Arc<dyn SettingsBackend>) -> Self {
        let defaults = Settings::default();

        let raw = |key: SettingKey| -> Option<String> {
            match backend.read(key.as_str()) {
                Ok(value) => value,
                Err(err) => {
                    debug!(key = %key, error = %err, "Failed to read setting, using default");
                    None
                }
            }
        };

        let values = Settings {
            exchange_rate: decode_number(
                raw(SettingKey::Rate),
                EXCHANGE_RATE_RANGE,
                defaults.exchange_rate,
            ),
            commission_pct: decode_number(
                raw(SettingKey::Commission),
                COMMISSION_PCT_RANGE,
                defaults.commission_pct,
            ),
            markup_local: decode_number(
                raw(SettingKey::MarkupRub),
                MARKUP_LOCAL_RANGE,
                defaults.markup_local,
            ),
            theme_mode: raw(SettingKey::Theme)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.theme_mode),
            accent_choice: raw(SettingKey::Accent)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.accent_choice),
        };

        debug!(?values, "Settings loaded");
        SettingsStore { backend, values }
    }

    /// A copy of every current value.
    pub fn snapshot(&self) -> Settings {
        self.values
    }

    // -------------------------------------------------------------------------
    // Typed accessors
    // -------------------------------------------------------------------------

    pub fn exchange_rate(&self) -> f64 {
        self.values.exchange_rate
    }

    /// Clamps and stores the exchange rate.
    pub fn set_exchange_rate(&mut self, rate: f64) {
        self.values.exchange_rate = clamp(rate, EXCHANGE_RATE_RANGE);
        self.persist(SettingKey::Rate);
    }

    pub fn commission_pct(&self) -> f64 {
        self.values.commission_pct
    }

    /// Clamps and stores the commission percentage.
    pub fn set_commission_pct(&mut self, pct: f64) {
        self.values.commission_pct = clamp(pct, COMMISSION_PCT_RANGE);
        self.persist(SettingKey::Commission);
    }

    pub fn markup_local(&self) -> f64 {
        self.values.markup_local
    }

    /// Clamps and stores the flat markup.
    pub fn set_markup_local(&mut self, markup: f64) {
        self.values.markup_local = clamp(markup, MARKUP_LOCAL_RANGE);
        self.persist(SettingKey::MarkupRub);
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.values.theme_mode
    }

    pub fn set_theme_mode(&mut self, theme: ThemeMode) {
        self.values.theme_mode = theme;
        self.persist(SettingKey::Theme);
    }

    pub fn accent_choice(&self) -> AccentChoice {
        self.values.accent_choice
    }

    pub fn set_accent_choice(&mut self, accent: AccentChoice) {
        self.values.accent_choice = accent;
        self.persist(SettingKey::Accent);
    }

    // -------------------------------------------------------------------------
    // String access (settings command)
    // -------------------------------------------------------------------------

    /// The current value of `key` in its stored string form.
    pub fn get_encoded(&self, key: SettingKey) -> String {
        self.values.encoded(key)
    }

    /// Sets a setting from user text.
    ///
    /// Numbers follow the usual input rules (garbage becomes 0, then
    /// clamped). Theme and accent must name a known variant.
    pub fn set_from_str(&mut self, key: SettingKey, text: &str) -> CoreResult<()> {
        match key {
            SettingKey::Rate => self.set_exchange_rate(parse_input(text)),
            SettingKey::Commission => self.set_commission_pct(parse_input(text)),
            SettingKey::MarkupRub => self.set_markup_local(parse_input(text)),
            SettingKey::Theme => self.set_theme_mode(text.parse()?),
            SettingKey::Accent => self.set_accent_choice(text.parse()?),
        }
        Ok(())
    }

    /// Writes one key through to the backend; failures are logged only.
    fn persist(&self, key: SettingKey) {
        let value = self.values.encoded(key);
        match self.backend.write(key.as_str(), &value) {
            Ok(()) => debug!(key = %key, value = %value, "Setting persisted"),
            Err(err) => debug!(
                key = %key,
                error = %err,
                "Failed to persist setting, keeping in-memory value"
            ),
        }
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Shortest string that parses back to the same `f64`.
fn encode_number(value: f64) -> String {
    value.to_string()
}

/// Parses a stored number; missing, unparseable and non-finite values give
/// `default`, anything else is clamped into `range`.
fn decode_number(raw: Option<String>, range: FieldRange, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| clamp(v, range))
        .unwrap_or(default)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{JsonFileBackend, MemoryBackend};
    use crate::error::{StoreError, StoreResult};

    /// Backend where every operation fails, like a browser with storage
    /// disabled.
    struct BrokenBackend;

    impl SettingsBackend for BrokenBackend {
        fn read(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }
    }

    fn memory_store() -> (Arc<MemoryBackend>, SettingsStore) {
        let backend = Arc::new(MemoryBackend::new());
        let store = SettingsStore::load(backend.clone());
        (backend, store)
    }

    #[test]
    fn test_defaults_when_empty() {
        let (_, store) = memory_store();
        assert_eq!(store.exchange_rate(), 13.2);
        assert_eq!(store.commission_pct(), 10.0);
        assert_eq!(store.markup_local(), 0.0);
        assert_eq!(store.theme_mode(), ThemeMode::Dark);
        assert_eq!(store.accent_choice(), AccentChoice::Green);
    }

    #[test]
    fn test_defaults_when_corrupt() {
        let backend = Arc::new(MemoryBackend::with_entries([
            ("rate", "abc"),
            ("commission", "NaN"),
            ("markupRub", "inf"),
            ("theme", "blue"),
            ("accent", ""),
        ]));
        let store = SettingsStore::load(backend);
        assert_eq!(store.snapshot(), Settings::default());
    }

    #[test]
    fn test_loads_stored_values() {
        let backend = Arc::new(MemoryBackend::with_entries([
            ("rate", "12.9"),
            ("commission", "7.5"),
            ("markupRub", "1500"),
            ("theme", "light"),
            ("accent", "red"),
        ]));
        let store = SettingsStore::load(backend);
        assert_eq!(store.exchange_rate(), 12.9);
        assert_eq!(store.commission_pct(), 7.5);
        assert_eq!(store.markup_local(), 1500.0);
        assert_eq!(store.theme_mode(), ThemeMode::Light);
        assert_eq!(store.accent_choice(), AccentChoice::Red);
    }

    #[test]
    fn test_out_of_range_stored_value_is_clamped() {
        let backend = Arc::new(MemoryBackend::with_entries([
            ("rate", "-3"),
            ("commission", "250"),
        ]));
        let store = SettingsStore::load(backend);
        assert_eq!(store.exchange_rate(), 0.0);
        assert_eq!(store.commission_pct(), 100.0);
    }

    #[test]
    fn test_legacy_percentage_markup_is_read_as_amount() {
        // An old build stored "15" meaning 15%; it is now 15 roubles
        let backend = Arc::new(MemoryBackend::with_entries([("markupRub", "15")]));
        let store = SettingsStore::load(backend);
        assert_eq!(store.markup_local(), 15.0);
    }

    #[test]
    fn test_set_writes_through() {
        let (backend, mut store) = memory_store();
        store.set_exchange_rate(14.25);
        store.set_markup_local(1500.0);
        store.set_theme_mode(ThemeMode::Light);

        assert_eq!(backend.read("rate").unwrap().as_deref(), Some("14.25"));
        assert_eq!(backend.read("markupRub").unwrap().as_deref(), Some("1500"));
        assert_eq!(backend.read("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(backend.read("commission").unwrap(), None);
    }

    #[test]
    fn test_set_clamps() {
        let (backend, mut store) = memory_store();
        store.set_commission_pct(120.0);
        assert_eq!(store.commission_pct(), 100.0);
        assert_eq!(backend.read("commission").unwrap().as_deref(), Some("100"));

        store.set_exchange_rate(f64::NAN);
        assert_eq!(store.exchange_rate(), 0.0);
    }

    #[test]
    fn test_round_trip_every_field() {
        let rates = [0.0, 0.1, 13.2, 99.999, 10_000.0];
        let pcts = [0.0, 0.5, 10.0, 33.333, 100.0];
        let markups = [0.0, 1.0, 1500.0, 123_456.78, 10_000_000.0];

        for ((rate, pct), markup) in rates.iter().zip(&pcts).zip(&markups) {
            let (backend, mut store) = memory_store();
            store.set_exchange_rate(*rate);
            store.set_commission_pct(*pct);
            store.set_markup_local(*markup);
            assert_eq!(store.exchange_rate(), *rate);
            assert_eq!(store.commission_pct(), *pct);
            assert_eq!(store.markup_local(), *markup);

            // And through a fresh load
            let reloaded = SettingsStore::load(backend);
            assert_eq!(reloaded.exchange_rate(), *rate);
            assert_eq!(reloaded.commission_pct(), *pct);
            assert_eq!(reloaded.markup_local(), *markup);
        }

        for theme in [ThemeMode::Dark, ThemeMode::Light] {
            for accent in [AccentChoice::Green, AccentChoice::Red] {
                let (backend, mut store) = memory_store();
                store.set_theme_mode(theme);
                store.set_accent_choice(accent);
                let reloaded = SettingsStore::load(backend);
                assert_eq!(reloaded.theme_mode(), theme);
                assert_eq!(reloaded.accent_choice(), accent);
            }
        }
    }

    #[test]
    fn test_broken_backend_keeps_in_memory_value() {
        let mut store = SettingsStore::load(Arc::new(BrokenBackend));
        assert_eq!(store.snapshot(), Settings::default());

        store.set_exchange_rate(15.0);
        store.set_accent_choice(AccentChoice::Red);
        assert_eq!(store.exchange_rate(), 15.0);
        assert_eq!(store.accent_choice(), AccentChoice::Red);
    }

    #[test]
    fn test_set_from_str() {
        let (_, mut store) = memory_store();
        store.set_from_str(SettingKey::Rate, "13,5").unwrap();
        store.set_from_str(SettingKey::Commission, "oops").unwrap();
        store.set_from_str(SettingKey::Theme, "light").unwrap();

        assert_eq!(store.exchange_rate(), 13.5);
        assert_eq!(store.commission_pct(), 0.0);
        assert_eq!(store.theme_mode(), ThemeMode::Light);
        assert!(store.set_from_str(SettingKey::Accent, "blue").is_err());
        assert_eq!(store.accent_choice(), AccentChoice::Green);
    }

    #[test]
    fn test_setting_key_parse() {
        assert_eq!("markupRub".parse::<SettingKey>(), Ok(SettingKey::MarkupRub));
        assert_eq!(" MARKUPRUB ".parse::<SettingKey>(), Ok(SettingKey::MarkupRub));
        assert!("markup".parse::<SettingKey>().is_err());
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
    }

    #[test]
    fn test_file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());

        let mut store = SettingsStore::open(&config);
        store.set_exchange_rate(12.4);
        store.set_accent_choice(AccentChoice::Red);
        drop(store);

        let store = SettingsStore::open(&config);
        assert_eq!(store.exchange_rate(), 12.4);
        assert_eq!(store.accent_choice(), AccentChoice::Red);
        assert_eq!(store.commission_pct(), 10.0);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marza.json");
        std::fs::write(&path, "{ broken").unwrap();

        let store = SettingsStore::load(Arc::new(JsonFileBackend::new(&path)));
        assert_eq!(store.snapshot(), Settings::default());
    }
}

//! # Calculator State
//!
//! The live calculator: current inputs, the breakdown derived from them,
//! and the settings store that remembers the adjustable fields.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Edit Flow                                 │
//! │                                                                         │
//! │  User Action            CalculatorState             Side Effect         │
//! │  ───────────            ───────────────             ───────────         │
//! │                                                                         │
//! │  base 400 ────────────► set_field(Base, 400) ─────► (none)             │
//! │                                                                         │
//! │  rate 14 ─────────────► set_field(Rate, 14) ──────► store "rate"       │
//! │                                                                         │
//! │  commission 150 ──────► clamp → 100 ──────────────► store "commission" │
//! │                                                                         │
//! │  markup abc ──────────► parse → NaN → 0 ──────────► store "markupRub"  │
//! │                                                                         │
//! │  Every edit ends with compute(inputs) → breakdown (never stale).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Base price and logistics are per-calculation and start at 0 each
//! session; everything else starts from the store.

use marza_core::validation::parse_input;
use marza_core::{
    compute, format_summary, share_url, AccentChoice, CoreResult, InputField, PricingBreakdown,
    PricingInputs, ShareTarget, ThemeMode,
};
use marza_store::{SettingKey, Settings, SettingsStore};
use tracing::debug;

/// Calculator state for one session.
#[derive(Debug)]
pub struct CalculatorState {
    store: SettingsStore,
    inputs: PricingInputs,
    breakdown: PricingBreakdown,
}

impl CalculatorState {
    /// Starts a session from the stored settings.
    pub fn new(store: SettingsStore) -> Self {
        let inputs = inputs_from(&store.snapshot());
        CalculatorState {
            breakdown: compute(inputs),
            store,
            inputs,
        }
    }

    pub fn inputs(&self) -> PricingInputs {
        self.inputs
    }

    pub fn breakdown(&self) -> PricingBreakdown {
        self.breakdown
    }

    pub fn settings(&self) -> Settings {
        self.store.snapshot()
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Sets one input (clamped), persists it if it is a remembered field,
    /// and returns the fresh breakdown.
    pub fn set_field(&mut self, field: InputField, value: f64) -> PricingBreakdown {
        self.inputs.set(field, value);
        let stored = self.inputs.get(field);

        match field {
            InputField::ExchangeRate => self.store.set_exchange_rate(stored),
            InputField::CommissionPct => self.store.set_commission_pct(stored),
            InputField::MarkupLocal => self.store.set_markup_local(stored),
            InputField::BaseForeign | InputField::Logistics => {}
        }

        debug!(field = %field, value = stored, "Input changed");
        self.recompute()
    }

    /// Like [`set_field`](Self::set_field) with raw user text.
    pub fn set_field_text(&mut self, field: InputField, text: &str) -> PricingBreakdown {
        self.set_field(field, parse_input(text))
    }

    /// Sets a stored setting by its storage key and pulls the result back
    /// into the inputs.
    pub fn apply_setting(&mut self, key: SettingKey, text: &str) -> CoreResult<PricingBreakdown> {
        self.store.set_from_str(key, text)?;

        let settings = self.store.snapshot();
        self.inputs.exchange_rate = settings.exchange_rate;
        self.inputs.commission_pct = settings.commission_pct;
        self.inputs.markup_local = settings.markup_local;
        Ok(self.recompute())
    }

    fn recompute(&mut self) -> PricingBreakdown {
        self.breakdown = compute(self.inputs);
        self.breakdown
    }

    // -------------------------------------------------------------------------
    // Appearance
    // -------------------------------------------------------------------------

    pub fn theme(&self) -> ThemeMode {
        self.store.theme_mode()
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.store.set_theme_mode(theme);
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme().toggle();
        self.set_theme(next);
        next
    }

    pub fn accent(&self) -> AccentChoice {
        self.store.accent_choice()
    }

    pub fn set_accent(&mut self, accent: AccentChoice) {
        self.store.set_accent_choice(accent);
    }

    pub fn toggle_accent(&mut self) -> AccentChoice {
        let next = self.accent().toggle();
        self.set_accent(next);
        next
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Plain-text summary of the current calculation.
    pub fn summary(&self) -> String {
        format_summary(&self.inputs, &self.breakdown)
    }

    /// Share link carrying the current summary.
    pub fn share_link(&self, target: ShareTarget) -> String {
        share_url(target, &self.summary())
    }
}

fn inputs_from(settings: &Settings) -> PricingInputs {
    PricingInputs {
        base_foreign: 0.0,
        exchange_rate: settings.exchange_rate,
        logistics: 0.0,
        commission_pct: settings.commission_pct,
        markup_local: settings.markup_local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marza_store::{MemoryBackend, SettingsBackend};
    use std::sync::Arc;

    fn calculator_with(backend: Arc<MemoryBackend>) -> CalculatorState {
        CalculatorState::new(SettingsStore::load(backend))
    }

    #[test]
    fn test_starts_from_stored_settings() {
        let backend = Arc::new(MemoryBackend::with_entries([
            ("rate", "14"),
            ("commission", "5"),
            ("markupRub", "200"),
        ]));
        let calc = calculator_with(backend);

        let inputs = calc.inputs();
        assert_eq!(inputs.base_foreign, 0.0);
        assert_eq!(inputs.logistics, 0.0);
        assert_eq!(inputs.exchange_rate, 14.0);
        assert_eq!(inputs.commission_pct, 5.0);
        assert_eq!(inputs.markup_local, 200.0);
        assert_eq!(calc.breakdown().final_price, 200.0);
    }

    #[test]
    fn test_reference_calculation() {
        let mut calc = calculator_with(Arc::new(MemoryBackend::new()));
        calc.set_field(InputField::BaseForeign, 400.0);
        let breakdown = calc.set_field(InputField::Logistics, 1000.0);

        assert_eq!(breakdown.converted_base, 5280.0);
        assert_eq!(breakdown.commission_amount, 528.0);
        assert_eq!(breakdown.cost, 6808.0);
        assert_eq!(breakdown.final_price, 6808.0);

        let breakdown = calc.set_field(InputField::MarkupLocal, 1500.0);
        assert_eq!(breakdown.final_price, 8308.0);
        assert_eq!(breakdown.profit, 1500.0);
        assert_eq!(calc.breakdown(), breakdown);
    }

    #[test]
    fn test_only_remembered_fields_are_persisted() {
        let backend = Arc::new(MemoryBackend::new());
        let mut calc = calculator_with(backend.clone());

        calc.set_field(InputField::BaseForeign, 400.0);
        calc.set_field(InputField::Logistics, 1000.0);
        assert_eq!(backend.read("rate").unwrap(), None);

        calc.set_field(InputField::ExchangeRate, 14.5);
        calc.set_field(InputField::CommissionPct, 150.0);
        calc.set_field_text(InputField::MarkupLocal, "abc");

        assert_eq!(backend.read("rate").unwrap().as_deref(), Some("14.5"));
        assert_eq!(backend.read("commission").unwrap().as_deref(), Some("100"));
        assert_eq!(backend.read("markupRub").unwrap().as_deref(), Some("0"));
        assert_eq!(calc.inputs().commission_pct, 100.0);
    }

    #[test]
    fn test_text_edits_clamp() {
        let mut calc = calculator_with(Arc::new(MemoryBackend::new()));
        let breakdown = calc.set_field_text(InputField::BaseForeign, "-50");
        assert_eq!(calc.inputs().base_foreign, 0.0);
        assert_eq!(breakdown.final_price, 0.0);

        calc.set_field_text(InputField::BaseForeign, "1 000,5");
        assert_eq!(calc.inputs().base_foreign, 1000.5);
    }

    #[test]
    fn test_apply_setting_updates_inputs() {
        let mut calc = calculator_with(Arc::new(MemoryBackend::new()));
        calc.set_field(InputField::BaseForeign, 100.0);

        let breakdown = calc.apply_setting(SettingKey::Rate, "10").unwrap();
        assert_eq!(calc.inputs().exchange_rate, 10.0);
        assert_eq!(breakdown.converted_base, 1000.0);

        assert!(calc.apply_setting(SettingKey::Theme, "blue").is_err());
        calc.apply_setting(SettingKey::Theme, "light").unwrap();
        assert_eq!(calc.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_toggles_persist() {
        let backend = Arc::new(MemoryBackend::new());
        let mut calc = calculator_with(backend.clone());

        assert_eq!(calc.toggle_theme(), ThemeMode::Light);
        assert_eq!(calc.toggle_accent(), AccentChoice::Red);
        assert_eq!(backend.read("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(backend.read("accent").unwrap().as_deref(), Some("red"));

        assert_eq!(calc.toggle_theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_summary_and_share_link() {
        let mut calc = calculator_with(Arc::new(MemoryBackend::new()));
        calc.set_field(InputField::BaseForeign, 400.0);

        let summary = calc.summary();
        assert!(summary.contains("¥400.00"));

        let link = calc.share_link(ShareTarget::WhatsApp);
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains(' '));
    }
}

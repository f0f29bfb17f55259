//! # Quote Commands
//!
//! `quote` prints the breakdown, `summary` prints the shareable text.
//! Both first apply the inputs given on the command line as ordinary
//! edits, so rate, commission and markup given here are remembered.

use serde::Serialize;
use tokio::io::AsyncWrite;
use tracing::debug;

use marza_core::{PricingBreakdown, PricingInputs};

use super::{write_line, CommandContext};
use crate::cli::InputArgs;
use crate::error::ApiError;
use crate::state::CalculatorState;
use crate::view::render_calculator;

/// JSON shape of `quote --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub inputs: PricingInputs,
    pub breakdown: PricingBreakdown,
    pub summary: String,
}

impl From<&CalculatorState> for QuoteResponse {
    fn from(calculator: &CalculatorState) -> Self {
        QuoteResponse {
            inputs: calculator.inputs(),
            breakdown: calculator.breakdown(),
            summary: calculator.summary(),
        }
    }
}

/// Applies every given input as an edit. Returns the final price from
/// before the edits.
pub fn apply_inputs(calculator: &mut CalculatorState, inputs: &InputArgs) -> f64 {
    let previous = calculator.breakdown().final_price;
    for (field, text) in inputs.edits() {
        calculator.set_field_text(field, text);
    }
    previous
}

/// Prints the breakdown (or JSON with `--json`).
pub async fn quote<W>(
    ctx: &mut CommandContext<'_>,
    inputs: &InputArgs,
    json: bool,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    let previous = apply_inputs(ctx.calculator, inputs);
    debug!(final_price = ctx.calculator.breakdown().final_price, "quote command");

    if json {
        let response = QuoteResponse::from(&*ctx.calculator);
        let text = serde_json::to_string_pretty(&response)?;
        return write_line(out, &text).await;
    }

    render_calculator(out, ctx.calculator, previous, &ctx.view).await?;
    Ok(())
}

/// Prints the plain-text summary.
pub async fn summary<W>(
    ctx: &mut CommandContext<'_>,
    inputs: &InputArgs,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    apply_inputs(ctx.calculator, inputs);
    write_line(out, &ctx.calculator.summary()).await
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::effects::RecordingEffects;

    fn reference_args() -> InputArgs {
        InputArgs {
            base: Some("400".to_string()),
            rate: Some("13.2".to_string()),
            logistics: Some("1000".to_string()),
            commission: Some("10".to_string()),
            markup: Some("1500".to_string()),
        }
    }

    #[test]
    fn test_apply_inputs_returns_previous_final() {
        let mut calc = calculator();
        let previous = apply_inputs(&mut calc, &reference_args());
        assert_eq!(previous, 0.0);
        assert_eq!(calc.breakdown().final_price, 8308.0);

        // Omitted fields keep their current values
        let previous = apply_inputs(&mut calc, &InputArgs::default());
        assert_eq!(previous, 8308.0);
        assert_eq!(calc.breakdown().final_price, 8308.0);
    }

    #[tokio::test]
    async fn test_quote_plain() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let mut out = Vec::new();
        quote(&mut ctx, &reference_args(), false, &mut out)
            .await
            .unwrap();

        let text = output(out);
        assert!(text.contains("Cost                6\u{a0}808\u{a0}₽"));
        assert!(text.contains("Final price         8\u{a0}308\u{a0}₽"));
    }

    #[tokio::test]
    async fn test_quote_json() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let mut out = Vec::new();
        quote(&mut ctx, &reference_args(), true, &mut out)
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output(out)).unwrap();
        assert_eq!(json["inputs"]["baseForeign"], 400.0);
        assert_eq!(json["breakdown"]["finalPrice"], 8308.0);
        assert_eq!(json["breakdown"]["profit"], 1500.0);
        assert!(json["summary"]
            .as_str()
            .unwrap()
            .ends_with("Final price: 8\u{a0}308\u{a0}₽"));
    }

    #[tokio::test]
    async fn test_summary_garbage_input_is_zero() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let args = InputArgs {
            base: Some("lots".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();
        summary(&mut ctx, &args, &mut out).await.unwrap();

        let text = output(out);
        assert!(text.contains("Base price: ¥0.00"));
        assert!(text.contains("Final price: 0\u{a0}₽"));
    }
}

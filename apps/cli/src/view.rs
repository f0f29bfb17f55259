//! # Terminal View
//!
//! Turns calculator state into terminal text, coloured by theme and accent.
//!
//! ```text
//!   Base price           ¥400.00
//!   Exchange rate        13.2
//!   Converted            5 280 ₽
//!   Logistics            1 000 ₽
//!   Commission (10%)     528 ₽
//!   Cost                 6 808 ₽
//!   Markup (22.0%)       1 500 ₽
//!   Profit               1 500 ₽
//!   ────────────────────────────
//!   Final price          8 308 ₽      ◄── accent colour, animated on change
//! ```

use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::Instant;

use marza_core::format::{format_decimal, format_foreign, format_local, format_percent};
use marza_core::{AccentChoice, PriceTween, PricingBreakdown, PricingInputs, ThemeMode};

use crate::state::{CalculatorState, Notification, NotificationKind};

/// Width of the label column.
const LABEL_WIDTH: usize = 20;

/// Time between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Colour scheme derived from the stored theme and accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: ThemeMode,
    pub accent: AccentChoice,
    /// No escape codes at all.
    pub plain: bool,
}

impl Palette {
    pub fn new(theme: ThemeMode, accent: AccentChoice) -> Self {
        Palette {
            theme,
            accent,
            plain: false,
        }
    }

    pub fn plain() -> Self {
        Palette {
            theme: ThemeMode::default(),
            accent: AccentChoice::default(),
            plain: true,
        }
    }

    fn label(&self, text: &str) -> String {
        let padded = format!("{:<width$}", text, width = LABEL_WIDTH);
        if self.plain {
            return padded;
        }
        match self.theme {
            ThemeMode::Dark => padded.white().to_string(),
            ThemeMode::Light => padded.black().dimmed().to_string(),
        }
    }

    fn value(&self, text: &str) -> String {
        if self.plain {
            return text.to_string();
        }
        match self.theme {
            ThemeMode::Dark => text.bright_white().to_string(),
            ThemeMode::Light => text.black().to_string(),
        }
    }

    /// The accent colour, used for the final price.
    pub fn accent(&self, text: &str) -> String {
        if self.plain {
            return text.to_string();
        }
        match self.accent {
            AccentChoice::Green => text.green().bold().to_string(),
            AccentChoice::Red => text.red().bold().to_string(),
        }
    }

    fn rule(&self) -> String {
        let rule = "─".repeat(LABEL_WIDTH + 12);
        if self.plain {
            rule
        } else {
            rule.dimmed().to_string()
        }
    }

    fn row(&self, label: &str, value: &str) -> String {
        format!("{}{}", self.label(label), self.value(value))
    }
}

/// How output is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Count the final price up/down when it changes.
    pub animate: bool,
    /// Emit no colour escape codes.
    pub plain: bool,
}

impl ViewOptions {
    pub fn palette(&self, theme: ThemeMode, accent: AccentChoice) -> Palette {
        Palette {
            theme,
            accent,
            plain: self.plain,
        }
    }
}

/// Every row above the final price.
pub fn breakdown_rows(
    inputs: &PricingInputs,
    breakdown: &PricingBreakdown,
    palette: &Palette,
) -> Vec<String> {
    let inputs = inputs.sanitized();
    vec![
        palette.row("Base price", &format_foreign(inputs.base_foreign)),
        palette.row("Exchange rate", &format_decimal(inputs.exchange_rate, 4)),
        palette.row("Converted", &format_local(breakdown.converted_base)),
        palette.row("Logistics", &format_local(inputs.logistics)),
        palette.row(
            &format!("Commission ({}%)", format_decimal(inputs.commission_pct, 2)),
            &format_local(breakdown.commission_amount),
        ),
        palette.row("Cost", &format_local(breakdown.cost)),
        palette.row(
            &format!("Markup ({})", format_percent(breakdown.markup_pct_of_cost, 1)),
            &format_local(breakdown.markup),
        ),
        palette.row("Profit", &format_local(breakdown.profit)),
        palette.rule(),
    ]
}

/// The final price row for `value`.
pub fn final_price_line(value: f64, palette: &Palette) -> String {
    format!(
        "{}{}",
        palette.label("Final price"),
        palette.accent(&format_local(value))
    )
}

/// The whole breakdown, final price included.
pub fn render_breakdown(
    inputs: &PricingInputs,
    breakdown: &PricingBreakdown,
    palette: &Palette,
) -> String {
    let mut lines = breakdown_rows(inputs, breakdown, palette);
    lines.push(final_price_line(breakdown.final_price, palette));
    lines.join("\n")
}

/// One-line rendering of a notification.
pub fn render_notification(notification: &Notification, palette: &Palette) -> String {
    let (mark, text) = match notification.kind {
        NotificationKind::Success => ("✓", &notification.message),
        NotificationKind::Error => ("✗", &notification.message),
    };
    let line = format!("{mark} {text}");
    if palette.plain {
        return line;
    }
    match notification.kind {
        NotificationKind::Success => line.green().to_string(),
        NotificationKind::Error => line.red().to_string(),
    }
}

/// Counts the final price row from `tween.from` to `tween.to`, redrawing
/// it in place, and ends the line.
pub async fn animate_final_price<W>(
    out: &mut W,
    tween: PriceTween,
    palette: &Palette,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let start = Instant::now();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);

    loop {
        ticker.tick().await;
        let elapsed = start.elapsed();
        let frame = format!(
            "\r\x1b[2K{}",
            final_price_line(tween.value_at(elapsed), palette)
        );
        out.write_all(frame.as_bytes()).await?;
        out.flush().await?;

        if tween.is_finished(elapsed) {
            break;
        }
    }

    out.write_all(b"\n").await?;
    out.flush().await
}

/// Draws the calculator, animating the final price from `previous_final`
/// when it changed.
pub async fn render_calculator<W>(
    out: &mut W,
    calculator: &CalculatorState,
    previous_final: f64,
    view: &ViewOptions,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let palette = view.palette(calculator.theme(), calculator.accent());
    let inputs = calculator.inputs();
    let breakdown = calculator.breakdown();

    let mut text = breakdown_rows(&inputs, &breakdown, &palette).join("\n");
    text.push('\n');
    out.write_all(text.as_bytes()).await?;

    if view.animate && previous_final != breakdown.final_price {
        let tween = PriceTween::new(previous_final, breakdown.final_price);
        animate_final_price(out, tween, &palette).await
    } else {
        let line = format!("{}\n", final_price_line(breakdown.final_price, &palette));
        out.write_all(line.as_bytes()).await?;
        out.flush().await
    }
}

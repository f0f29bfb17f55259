//! # Settings Commands
//!
//! `settings show`, `settings set <key> <value>`, `theme`, `accent`.

use tokio::io::AsyncWrite;
use tracing::debug;

use marza_core::{AccentChoice, ThemeMode};
use marza_store::SettingKey;

use super::{write_line, CommandContext};
use crate::cli::SettingsCommands;
use crate::error::ApiError;
use crate::state::CalculatorState;

/// Word that flips theme/accent instead of naming a value.
pub(crate) const TOGGLE: &str = "toggle";

pub async fn settings<W>(
    ctx: &mut CommandContext<'_>,
    action: SettingsCommands,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    match action {
        SettingsCommands::Show { json } => {
            if json {
                let text = serde_json::to_string_pretty(&ctx.calculator.settings())?;
                write_line(out, &text).await
            } else {
                write_line(out, &settings_table(ctx.calculator)).await
            }
        }
        SettingsCommands::Set { key, value } => {
            let key: SettingKey = key.parse()?;
            ctx.calculator.apply_setting(key, &value)?;
            debug!(%key, "Setting changed from command line");
            let line = format!("{} = {}", key, ctx.calculator.settings().encoded(key));
            write_line(out, &line).await
        }
    }
}

/// One `key = value` line per setting, in storage form.
pub fn settings_table(calculator: &CalculatorState) -> String {
    let settings = calculator.settings();
    SettingKey::ALL
        .iter()
        .map(|key| format!("{} = {}", key, settings.encoded(*key)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies `value` ("dark", "light", "toggle") to the theme, if given.
pub fn change_theme(
    calculator: &mut CalculatorState,
    value: Option<&str>,
) -> Result<ThemeMode, ApiError> {
    match value.map(str::trim) {
        None => {}
        Some(v) if v.eq_ignore_ascii_case(TOGGLE) => {
            calculator.toggle_theme();
        }
        Some(v) => calculator.set_theme(v.parse()?),
    }
    Ok(calculator.theme())
}

/// Applies `value` ("green", "red", "toggle") to the accent, if given.
pub fn change_accent(
    calculator: &mut CalculatorState,
    value: Option<&str>,
) -> Result<AccentChoice, ApiError> {
    match value.map(str::trim) {
        None => {}
        Some(v) if v.eq_ignore_ascii_case(TOGGLE) => {
            calculator.toggle_accent();
        }
        Some(v) => calculator.set_accent(v.parse()?),
    }
    Ok(calculator.accent())
}

pub async fn theme<W>(
    ctx: &mut CommandContext<'_>,
    value: Option<&str>,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    let theme = change_theme(ctx.calculator, value)?;
    write_line(out, &format!("theme: {}", theme)).await
}

pub async fn accent<W>(
    ctx: &mut CommandContext<'_>,
    value: Option<&str>,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    let accent = change_accent(ctx.calculator, value)?;
    let palette = ctx.view.palette(ctx.calculator.theme(), accent);
    write_line(out, &format!("accent: {}", palette.accent(accent.as_str()))).await
}

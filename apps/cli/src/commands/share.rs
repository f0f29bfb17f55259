//! # Copy & Share Commands
//!
//! ```text
//! copy  ──► summary ──► Effects::write_clipboard ──┐
//!                                                  ├──► Notification (1.8s)
//! share ──► summary ──► share_url ──► open_url ────┘
//! ```
//!
//! Effect failures never abort the command; they become an error
//! notification. Nothing is retried.

use tokio::io::AsyncWrite;
use tracing::{debug, info};

use marza_core::ShareTarget;

use super::quote::apply_inputs;
use super::{write_line, CommandContext};
use crate::cli::InputArgs;
use crate::effects::Effects;
use crate::error::ApiError;
use crate::state::{CalculatorState, Notification};
use crate::view::render_notification;

/// Copies the current summary and reports the outcome.
pub async fn copy_summary(calculator: &CalculatorState, effects: &dyn Effects) -> Notification {
    match effects.write_clipboard(&calculator.summary()).await {
        Ok(()) => {
            info!("Summary copied to clipboard");
            Notification::success("Summary copied to clipboard")
        }
        Err(err) => {
            debug!(error = %err, "Clipboard write failed");
            Notification::error(format!("Copy failed: {}", err))
        }
    }
}

/// Opens the share link for the current summary and reports the outcome.
pub async fn share_summary(
    calculator: &CalculatorState,
    effects: &dyn Effects,
    target: ShareTarget,
) -> Notification {
    let url = calculator.share_link(target);
    match effects.open_url(&url).await {
        Ok(()) => {
            info!(%target, "Share link opened");
            Notification::success(format!("Opened {} share link", title(target)))
        }
        Err(err) => {
            debug!(%target, error = %err, "Share link could not be opened");
            Notification::error(format!("Share failed: {}", err))
        }
    }
}

fn title(target: ShareTarget) -> &'static str {
    match target {
        ShareTarget::Telegram => "Telegram",
        ShareTarget::WhatsApp => "WhatsApp",
    }
}

/// `marza copy`
pub async fn copy<W>(
    ctx: &mut CommandContext<'_>,
    inputs: &InputArgs,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    apply_inputs(ctx.calculator, inputs);
    let notification = copy_summary(ctx.calculator, ctx.effects).await;
    let palette = ctx
        .view
        .palette(ctx.calculator.theme(), ctx.calculator.accent());
    write_line(out, &render_notification(&notification, &palette)).await
}

/// `marza share <target>`
pub async fn share<W>(
    ctx: &mut CommandContext<'_>,
    target: &str,
    inputs: &InputArgs,
    print_only: bool,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    let target: ShareTarget = target.parse()?;
    apply_inputs(ctx.calculator, inputs);

    if print_only {
        return write_line(out, &ctx.calculator.share_link(target)).await;
    }

    let notification = share_summary(ctx.calculator, ctx.effects, target).await;
    let palette = ctx
        .view
        .palette(ctx.calculator.theme(), ctx.calculator.accent());
    write_line(out, &render_notification(&notification, &palette)).await
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::effects::RecordingEffects;
    use crate::error::ErrorCode;
    use crate::state::NotificationKind;
    use marza_core::InputField;

    #[tokio::test]
    async fn test_copy_summary_success() {
        let mut calc = calculator();
        calc.set_field(InputField::BaseForeign, 400.0);
        let effects = RecordingEffects::default();

        let notification = copy_summary(&calc, &effects).await;
        assert_eq!(notification.kind, NotificationKind::Success);

        let copied = effects.clipboard.lock().unwrap();
        assert_eq!(copied.len(), 1);
        assert_eq!(copied[0], calc.summary());
    }

    #[tokio::test]
    async fn test_copy_failure_becomes_notification() {
        let calc = calculator();
        let effects = RecordingEffects::failing();

        let notification = copy_summary(&calc, &effects).await;
        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.message.starts_with("Copy failed"));
        assert!(notification.message.contains("Clipboard unavailable"));
    }

    #[tokio::test]
    async fn test_share_opens_link() {
        let calc = calculator();
        let effects = RecordingEffects::default();

        let notification = share_summary(&calc, &effects, ShareTarget::Telegram).await;
        assert!(notification.is_success());
        assert_eq!(notification.message, "Opened Telegram share link");

        let opened = effects.opened.lock().unwrap();
        assert!(opened[0].starts_with("https://t.me/share/url?url="));
    }

    #[tokio::test]
    async fn test_share_print_only_does_not_open() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let mut out = Vec::new();
        share(&mut ctx, "wa", &InputArgs::default(), true, &mut out)
            .await
            .unwrap();

        assert!(output(out).starts_with("https://wa.me/?text=Price%20calculation"));
        assert!(effects.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_share_unknown_target() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let mut out = Vec::new();
        let err = share(&mut ctx, "fax", &InputArgs::default(), false, &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_copy_command_prints_notification() {
        let mut calc = calculator();
        let effects = RecordingEffects::failing();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let mut out = Vec::new();
        copy(&mut ctx, &InputArgs::default(), &mut out).await.unwrap();
        assert!(output(out).starts_with("✗ Copy failed"));
    }
}

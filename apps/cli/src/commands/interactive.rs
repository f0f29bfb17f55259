//! # Interactive Session
//!
//! A line-oriented calculator. Every edit recomputes and redraws the
//! breakdown; the final price counts to its new value.
//!
//! ```text
//! > base 400            edit an input (base, rate, logistics, commission, markup)
//! > theme [dark|light]  toggle or set the theme
//! > accent [green|red]  toggle or set the accent
//! > copy                summary to clipboard
//! > share telegram      open a share link (telegram/tg, whatsapp/wa)
//! > show                redraw
//! > help                list commands
//! > quit                leave (also Ctrl-D)
//! ```
//!
//! Copy/share outcomes are shown immediately and repeated under the next
//! redraw until they expire.

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use marza_core::{InputField, ShareTarget};

use super::settings::{change_accent, change_theme, TOGGLE};
use super::share::{copy_summary, share_summary};
use super::{write_line, CommandContext};
use crate::error::ApiError;
use crate::state::Notification;
use crate::view::{render_calculator, render_notification};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  base <n>          base price, yuan
  rate <n>          rubles per yuan
  logistics <n>     logistics, rubles
  commission <n>    commission, percent
  markup <n>        markup, rubles
  theme [value]     dark, light (no value toggles)
  accent [value]    green, red (no value toggles)
  copy              copy the summary
  share <target>    telegram or whatsapp
  show              redraw
  quit              leave";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Edit(InputField, String),
    Theme(Option<String>),
    Accent(Option<String>),
    Copy,
    Share(ShareTarget),
    Show,
    Help,
    Quit,
}

/// Parses one line. Blank lines are `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, ApiError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "theme" => SessionCommand::Theme(arg),
        "accent" => SessionCommand::Accent(arg),
        "copy" => SessionCommand::Copy,
        "share" => {
            let target = arg.ok_or_else(|| {
                ApiError::validation("share needs a target: telegram or whatsapp")
            })?;
            SessionCommand::Share(target.parse()?)
        }
        "show" | "summary" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => {
            let field: InputField = word.parse()?;
            // A field with no value clears it
            SessionCommand::Edit(field, arg.unwrap_or_default())
        }
    };

    Ok(Some(command))
}

/// Runs the session until `quit` or end of input.
pub async fn run_session<R, W>(
    ctx: &mut CommandContext<'_>,
    input: R,
    out: &mut W,
) -> Result<(), ApiError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Interactive session started");
    let mut lines = input.lines();
    let mut toast: Option<Notification> = None;

    let current = ctx.calculator.breakdown().final_price;
    render_calculator(out, ctx.calculator, current, &ctx.view).await?;

    loop {
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            // End of input: finish the prompt line
            out.write_all(b"\n").await?;
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                write_line(out, &err.message).await?;
                continue;
            }
        };
        debug!(?command, "Session command");

        let previous = ctx.calculator.breakdown().final_price;
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                write_line(out, HELP).await?;
                continue;
            }
            SessionCommand::Edit(field, text) => {
                ctx.calculator.set_field_text(field, &text);
            }
            SessionCommand::Theme(value) => {
                let value = value.as_deref().unwrap_or(TOGGLE);
                if let Err(err) = change_theme(ctx.calculator, Some(value)) {
                    write_line(out, &err.message).await?;
                    continue;
                }
            }
            SessionCommand::Accent(value) => {
                let value = value.as_deref().unwrap_or(TOGGLE);
                if let Err(err) = change_accent(ctx.calculator, Some(value)) {
                    write_line(out, &err.message).await?;
                    continue;
                }
            }
            SessionCommand::Copy => {
                let notification = copy_summary(ctx.calculator, ctx.effects).await;
                show_toast(ctx, &notification, out).await?;
                toast = Some(notification);
                continue;
            }
            SessionCommand::Share(target) => {
                let notification = share_summary(ctx.calculator, ctx.effects, target).await;
                show_toast(ctx, &notification, out).await?;
                toast = Some(notification);
                continue;
            }
            SessionCommand::Show => {}
        }

        render_calculator(out, ctx.calculator, previous, &ctx.view).await?;

        if let Some(active) = toast.take() {
            if !active.is_expired(Utc::now()) {
                show_toast(ctx, &active, out).await?;
                toast = Some(active);
            }
        }
    }

    info!("Interactive session ended");
    Ok(())
}

async fn show_toast<W>(
    ctx: &CommandContext<'_>,
    notification: &Notification,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    let palette = ctx
        .view
        .palette(ctx.calculator.theme(), ctx.calculator.accent());
    write_line(out, &render_notification(notification, &palette)).await
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::effects::RecordingEffects;
    use marza_core::{AccentChoice, ThemeMode};

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            parse_line("base 400").unwrap(),
            Some(SessionCommand::Edit(
                InputField::BaseForeign,
                "400".to_string()
            ))
        );
        assert_eq!(
            parse_line("  Markup   1 500 ").unwrap(),
            Some(SessionCommand::Edit(
                InputField::MarkupLocal,
                "1 500".to_string()
            ))
        );
        assert_eq!(
            parse_line("rate").unwrap(),
            Some(SessionCommand::Edit(InputField::ExchangeRate, String::new()))
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("theme").unwrap(),
            Some(SessionCommand::Theme(None))
        );
        assert_eq!(
            parse_line("accent red").unwrap(),
            Some(SessionCommand::Accent(Some("red".to_string())))
        );
        assert_eq!(
            parse_line("share tg").unwrap(),
            Some(SessionCommand::Share(ShareTarget::Telegram))
        );
        assert_eq!(parse_line("copy").unwrap(), Some(SessionCommand::Copy));
        assert_eq!(parse_line("q").unwrap(), Some(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("share").is_err());
        assert!(parse_line("share fax").is_err());
        assert!(parse_line("price 5").is_err());
    }

    #[tokio::test]
    async fn test_session_edits_and_persists() {
        let mut calc = calculator();
        let effects = RecordingEffects::default();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let script = "base 400\nlogistics 1000\nmarkup 1500\ntheme\naccent red\ncopy\nquit\nbase 1\n";
        let mut out = Vec::new();
        run_session(&mut ctx, script.as_bytes(), &mut out)
            .await
            .unwrap();

        assert_eq!(calc.breakdown().final_price, 8308.0);
        assert_eq!(calc.inputs().base_foreign, 400.0);
        assert_eq!(calc.theme(), ThemeMode::Light);
        assert_eq!(calc.accent(), AccentChoice::Red);
        assert_eq!(calc.settings().markup_local, 1500.0);

        let copied = effects.clipboard.lock().unwrap();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].ends_with("Final price: 8\u{a0}308\u{a0}₽"));

        let text = output(out);
        assert!(text.contains("✓ Summary copied to clipboard"));
    }

    #[tokio::test]
    async fn test_session_reports_bad_lines_and_continues() {
        let mut calc = calculator();
        let effects = RecordingEffects::failing();
        let mut ctx = CommandContext {
            calculator: &mut calc,
            effects: &effects,
            view: plain_view(),
        };

        let script = "colour blue\ntheme sepia\nshare whatsapp\nbase 10\n";
        let mut out = Vec::new();
        run_session(&mut ctx, script.as_bytes(), &mut out)
            .await
            .unwrap();

        let text = output(out);
        assert!(text.contains("Unknown field 'colour'"));
        assert!(text.contains("Unknown theme 'sepia'"));
        assert!(text.contains("✗ Share failed"));
        assert_eq!(calc.inputs().base_foreign, 10.0);
    }
}

//! # Commands Module
//!
//! Everything the `marza` binary can be asked to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (dispatch)
//! ├── quote.rs        ◄─── quote, summary
//! ├── share.rs        ◄─── copy, share
//! ├── settings.rs     ◄─── settings show/set, theme, accent
//! └── interactive.rs  ◄─── line-by-line session
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ marza quote --base 400 --logistics 1000                             │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Commands::Quote { inputs, json }                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  execute(command, &mut ctx, &mut stdout)                                │
//! │     ctx.calculator ◄── CalculatorState (inputs + settings store)        │
//! │     ctx.effects    ◄── clipboard / link opener                          │
//! │     ctx.view       ◄── animate? colour?                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<(), ApiError> ──► exit code                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output goes through a generic `AsyncWrite` so tests capture it in a
//! `Vec<u8>`.

pub mod interactive;
pub mod quote;
pub mod settings;
pub mod share;

use tokio::io::{AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::cli::Commands;
use crate::effects::Effects;
use crate::error::ApiError;
use crate::state::CalculatorState;
use crate::view::ViewOptions;

/// What a command runs against.
pub struct CommandContext<'a> {
    pub calculator: &'a mut CalculatorState,
    pub effects: &'a dyn Effects,
    pub view: ViewOptions,
}

/// Runs one parsed command.
pub async fn execute<W>(
    command: Commands,
    ctx: &mut CommandContext<'_>,
    out: &mut W,
) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    debug!(?command, "Executing command");

    match command {
        Commands::Quote { inputs, json } => quote::quote(ctx, &inputs, json, out).await,
        Commands::Summary { inputs } => quote::summary(ctx, &inputs, out).await,
        Commands::Copy { inputs } => share::copy(ctx, &inputs, out).await,
        Commands::Share {
            target,
            inputs,
            print_only,
        } => share::share(ctx, &target, &inputs, print_only, out).await,
        Commands::Settings { action } => settings::settings(ctx, action, out).await,
        Commands::Theme { value } => settings::theme(ctx, value.as_deref(), out).await,
        Commands::Accent { value } => settings::accent(ctx, value.as_deref(), out).await,
        Commands::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            interactive::run_session(ctx, input, out).await
        }
    }
}

/// Writes `text` followed by a newline.
pub(crate) async fn write_line<W>(out: &mut W, text: &str) -> Result<(), ApiError>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use marza_store::{SettingsStore, StoreConfig};

    pub fn calculator() -> CalculatorState {
        CalculatorState::new(SettingsStore::open(&StoreConfig::in_memory()))
    }

    pub fn plain_view() -> ViewOptions {
        ViewOptions {
            animate: false,
            plain: true,
        }
    }

    pub fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }
}

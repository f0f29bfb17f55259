//! # Marza Terminal Library
//!
//! Core library for the `marza` binary. Parses the command line, opens
//! the settings store and runs one command.
//!
//! ## Module Organization
//! ```text
//! marza_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── error.rs        ◄─── API error type for commands
//! ├── effects.rs      ◄─── clipboard & link opener
//! ├── view.rs         ◄─── themed rendering, price animation
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── calculator.rs   ◄─── inputs + breakdown + settings store
//! │   ├── config.rs       ◄─── AppConfig (env + flags)
//! │   └── notification.rs ◄─── 1.8s status messages
//! └── commands/
//!     ├── mod.rs          ◄─── dispatch
//!     ├── quote.rs        ◄─── quote, summary
//!     ├── share.rs        ◄─── copy, share
//!     ├── settings.rs     ◄─── settings, theme, accent
//!     └── interactive.rs  ◄─── session loop
//! ```

pub mod cli;
pub mod commands;
pub mod effects;
pub mod error;
pub mod state;
pub mod view;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marza_store::SettingsStore;

use cli::Cli;
use commands::CommandContext;
use effects::SystemEffects;
use state::{AppConfig, CalculatorState};
use view::ViewOptions;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs the command line application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Command Line ───────────────────────────────────────────────► │
/// │     • clap derive (cli.rs)                                              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: warn; override with RUST_LOG                             │
/// │                                                                         │
/// │  3. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults → MARZA_* env → flags                                    │
/// │                                                                         │
/// │  4. Open Settings ────────────────────────────────────────────────────► │
/// │     • <data dir>/marza.json, or memory with --ephemeral                 │
/// │     • missing/corrupt values fall back to defaults                      │
/// │                                                                         │
/// │  5. Run Command ──────────────────────────────────────────────────────► │
/// │     • errors print to stderr, exit code 1                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::from_env().with_args(&cli.global);
    info!(?config, "Starting Marza");

    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }
    let view = ViewOptions {
        animate: config.animate && stdout_is_terminal,
        plain: !stdout_is_terminal,
    };

    let store = SettingsStore::open(&config.store_config());
    let mut calculator = CalculatorState::new(store);
    let effects = SystemEffects;
    let mut ctx = CommandContext {
        calculator: &mut calculator,
        effects: &effects,
        view,
    };

    let mut stdout = tokio::io::stdout();
    match commands::execute(cli.get_command(), &mut ctx, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err.message);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=marza=trace` - Show trace for marza crates only
/// - Default: warnings only. Settings and effect failures are handled
///   without bothering the user, so they log at debug.
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use marza_core::InputField;
    use marza_store::StoreConfig;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unusable_data_dir_is_silent_at_default_filter() {
        // A regular file where the data directory should be
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = StoreConfig::new(file.path().join("sub"));

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut calculator = CalculatorState::new(SettingsStore::open(&config));
            calculator.set_field(InputField::ExchangeRate, 14.0);
            assert_eq!(calculator.settings().exchange_rate, 14.0);
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use marza_core::InputField;

#[derive(Parser, Debug)]
#[command(
    name = "marza",
    version,
    about = "Landed cost and sale price calculator for goods bought in yuan and sold in rubles"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GlobalArgs {
    /// Directory holding the settings file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep settings in memory only (nothing is read or written)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print the final price without animating it
    #[arg(long, global = true)]
    pub no_animate: bool,
}

/// Calculator inputs given on the command line.
///
/// Values are free text: anything unparseable counts as 0 and every
/// value is clamped into its field's range. Omitted rate, commission and
/// markup keep their stored values.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InputArgs {
    /// Base price in yuan
    #[arg(short, long, allow_hyphen_values = true)]
    pub base: Option<String>,

    /// Rubles per yuan (remembered)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Logistics cost in rubles
    #[arg(short, long, allow_hyphen_values = true)]
    pub logistics: Option<String>,

    /// Commission, percent of the converted price (remembered)
    #[arg(short, long, allow_hyphen_values = true)]
    pub commission: Option<String>,

    /// Markup in rubles (remembered)
    #[arg(short, long, allow_hyphen_values = true)]
    pub markup: Option<String>,
}

impl InputArgs {
    /// The fields that were given, in display order.
    pub fn edits(&self) -> Vec<(InputField, &str)> {
        [
            (InputField::BaseForeign, &self.base),
            (InputField::ExchangeRate, &self.rate),
            (InputField::Logistics, &self.logistics),
            (InputField::CommissionPct, &self.commission),
            (InputField::MarkupLocal, &self.markup),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|text| (field, text)))
        .collect()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Calculate and print the price breakdown
    Quote {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print inputs and breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the plain-text summary
    Summary {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Copy the summary to the clipboard
    Copy {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Share the summary via Telegram or WhatsApp
    Share {
        /// telegram (tg) or whatsapp (wa)
        target: String,

        #[command(flatten)]
        inputs: InputArgs,

        /// Print the link instead of opening it
        #[arg(long)]
        print_only: bool,
    },

    /// Inspect or change stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Show or change the theme (dark, light, toggle)
    Theme { value: Option<String> },

    /// Show or change the accent colour (green, red, toggle)
    Accent { value: Option<String> },

    /// Line-by-line calculator session (default)
    Interactive,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SettingsCommands {
    /// Print every stored setting
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one setting by its storage key (rate, commission, markupRub, theme, accent)
    Set { key: String, value: String },
}

impl Cli {
    /// Get the command to execute, defaulting to Interactive if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::try_parse_from(["marza"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Interactive);
        assert_eq!(cli.global, GlobalArgs::default());
    }

    #[test]
    fn test_quote_flags() {
        let cli = Cli::try_parse_from([
            "marza", "quote", "--base", "400", "-r", "13.2", "-l", "1000", "--json",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Quote { inputs, json } => {
                assert!(json);
                assert_eq!(inputs.base.as_deref(), Some("400"));
                assert_eq!(inputs.commission, None);
                assert_eq!(
                    inputs.edits(),
                    vec![
                        (InputField::BaseForeign, "400"),
                        (InputField::ExchangeRate, "13.2"),
                        (InputField::Logistics, "1000"),
                    ]
                );
            }
            other => panic!("Expected Quote command, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let cli = Cli::try_parse_from(["marza", "summary", "--markup", "-5"]).unwrap();
        match cli.get_command() {
            Commands::Summary { inputs } => assert_eq!(inputs.markup.as_deref(), Some("-5")),
            other => panic!("Expected Summary command, got {other:?}"),
        }
    }

    #[test]
    fn test_share_with_global_flags() {
        let cli = Cli::try_parse_from([
            "marza",
            "share",
            "whatsapp",
            "--print-only",
            "--ephemeral",
            "--data-dir",
            "/tmp/m",
        ])
        .unwrap();

        assert!(cli.global.ephemeral);
        assert_eq!(cli.global.data_dir, Some(PathBuf::from("/tmp/m")));
        match cli.get_command() {
            Commands::Share {
                target, print_only, ..
            } => {
                assert_eq!(target, "whatsapp");
                assert!(print_only);
            }
            other => panic!("Expected Share command, got {other:?}"),
        }
    }

    #[test]
    fn test_settings_set() {
        let cli = Cli::try_parse_from(["marza", "settings", "set", "markupRub", "1500"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Settings {
                action: SettingsCommands::Set {
                    key: "markupRub".to_string(),
                    value: "1500".to_string(),
                }
            }
        );
    }

    #[test]
    fn test_theme_value_optional() {
        let cli = Cli::try_parse_from(["marza", "theme"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Theme { value: None });

        let cli = Cli::try_parse_from(["marza", "--no-animate", "accent", "toggle"]).unwrap();
        assert!(cli.global.no_animate);
        assert_eq!(
            cli.get_command(),
            Commands::Accent {
                value: Some("toggle".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["marza", "frobnicate"]).is_err());
    }
}

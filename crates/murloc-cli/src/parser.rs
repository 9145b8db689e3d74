//! Root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect and adjust the launcher configuration.
#[derive(Parser)]
#[command(name = "murloc")]
#[command(about = "Inspect the Murloc Village launcher configuration")]
#[command(version)]
pub struct Cli {
    /// JSON file with configuration overrides
    #[arg(long = "config", global = true, env = "MURLOC_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ConfigField;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "murloc",
            "--verbose",
            "--config",
            "/tmp/launcher.json",
            "show",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/launcher.json")));
        assert!(matches!(cli.command, Some(Commands::Show { json: false })));
    }

    #[test]
    fn test_show_json() {
        let cli = Cli::parse_from(["murloc", "show", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Show { json: true })));
    }

    #[test]
    fn test_locale_optional_argument() {
        let cli = Cli::parse_from(["murloc", "locale"]);
        assert!(matches!(cli.command, Some(Commands::Locale { requested: None })));

        let cli = Cli::parse_from(["murloc", "locale", "fr-FR"]);
        match cli.command {
            Some(Commands::Locale { requested }) => {
                assert_eq!(requested.as_deref(), Some("fr-FR"));
            }
            _ => panic!("expected locale command"),
        }
    }

    #[test]
    fn test_set_field_names() {
        let cli = Cli::parse_from(["murloc", "set", "default-language", "frFR"]);
        match cli.command {
            Some(Commands::Set { field, value }) => {
                assert_eq!(field, ConfigField::DefaultLanguage);
                assert_eq!(value, "frFR");
            }
            _ => panic!("expected set command"),
        }

        assert!(Cli::try_parse_from(["murloc", "set", "hostname", "x"]).is_err());
    }
}

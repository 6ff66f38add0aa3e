use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::observability::logging::LogFormat;

/// Inspect the fractal catalog: menu schemas, defaults and enum values.
#[derive(Parser, Debug)]
#[command(name = "fractal_catalog", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    pub log_format: LogFormat,

    /// Output format on stdout.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true,
        env = "FRACTAL_CATALOG_FORMAT"
    )]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List registered fractals with their enum values.
    List,

    /// Show the menu order and controls of a fractal.
    Menu {
        /// Fractal name, e.g. "julia set".
        name: String,
    },

    /// Show the default parameters and viewport of a fractal.
    Defaults {
        /// Fractal name, e.g. "julia set".
        name: String,
    },

    /// Show the enum value of a fractal.
    Enum {
        /// Fractal name, e.g. "julia set".
        name: String,
    },

    /// Print the menu config, default store and fractal enum.
    Dump,

    /// Check the catalog invariants.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }

    #[test]
    fn parses_quoted_fractal_name() {
        let cli = Cli::try_parse_from(["fractal_catalog", "menu", "burning ship"]).unwrap();

        assert_eq!(
            cli.command,
            Commands::Menu {
                name: "burning ship".to_owned()
            }
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["fractal_catalog", "dump", "--format", "json", "-vv"]).unwrap();

        assert_eq!(cli.command, Commands::Dump);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Human);
    }

    #[test]
    fn menu_requires_a_name() {
        assert!(Cli::try_parse_from(["fractal_catalog", "menu"]).is_err());
    }
}

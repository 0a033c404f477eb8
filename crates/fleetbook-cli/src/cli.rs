//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use fleetbook_app::logging::Verbosity;
use fleetbook_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleetbook")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Record and edit a small catalog of vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new vehicle (all fields required)
    Add {
        /// Vehicle ID
        id: String,

        #[arg(long, default_value = "")]
        make: String,

        #[arg(long, default_value = "")]
        model: String,

        /// Four-digit year (e.g., 2020)
        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        color: String,
    },

    /// Show one vehicle
    View {
        /// Vehicle ID
        id: String,
    },

    /// Change some fields of a vehicle; omitted or empty fields are kept
    Update {
        /// Vehicle ID
        id: String,

        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a vehicle
    Delete {
        /// Vehicle ID
        id: String,
    },

    /// List all vehicles
    List,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the directory holding vehicles.json
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_missing_flags_default_to_empty() {
        let cli = Cli::try_parse_from(["fleetbook", "add", "V1", "--make", "Toyota"]).unwrap();
        match cli.command {
            Commands::Add { id, make, model, year, color } => {
                assert_eq!(id, "V1");
                assert_eq!(make, "Toyota");
                assert!(model.is_empty() && year.is_empty() && color.is_empty());
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_update_with_single_field() {
        let cli = Cli::try_parse_from(["fleetbook", "update", "V1", "--year", "2021"]).unwrap();
        match cli.command {
            Commands::Update { id, make, year, .. } => {
                assert_eq!(id, "V1");
                assert_eq!(make, None);
                assert_eq!(year.as_deref(), Some("2021"));
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["fleetbook", "list", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_from_flags() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().verbosity();

        assert_eq!(parse(&["fleetbook", "list"]), Verbosity::Normal);
        assert_eq!(parse(&["fleetbook", "list", "-q"]), Verbosity::Quiet);
        assert_eq!(parse(&["fleetbook", "-vv", "list"]), Verbosity::Trace);
        assert_eq!(parse(&["fleetbook", "list", "-v", "-v", "-v"]), Verbosity::Trace);
        assert_eq!(parse(&["fleetbook", "list", "--quiet", "-v"]), Verbosity::Quiet);
    }

    #[test]
    fn test_view_requires_id() {
        assert!(Cli::try_parse_from(["fleetbook", "view"]).is_err());
    }
}

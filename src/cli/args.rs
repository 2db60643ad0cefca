//! Command-line argument parsing for MediScan
//!
//! Provides clap-based CLI with subcommands and verbosity control. Without
//! a subcommand the binary starts the interactive screen loop.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MediScan - terminal health companion
#[derive(Parser, Debug)]
#[command(name = "mediscan")]
#[command(version)]
#[command(about = "Symptom checker, medication reminders and symptom logging in your terminal", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.mediscan/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banner and decorations)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive session (default)
    Start,

    /// Resolve possible diagnoses for the given symptoms and exit
    Check {
        /// Symptom names, exactly as listed in the catalog
        #[arg(value_name = "SYMPTOM")]
        symptoms: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List body regions, or the symptoms of one region
    Catalog {
        /// Body region to list symptoms for
        #[arg(value_name = "REGION")]
        region: Option<String>,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_starts_interactive() {
        let args = Args::parse_from(["mediscan"]);
        assert!(args.command.is_none());
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_check_subcommand() {
        let args = Args::parse_from(["mediscan", "check", "Headache", "Fever", "--json"]);
        match args.command {
            Some(Commands::Check { symptoms, json }) => {
                assert_eq!(symptoms, vec!["Headache", "Fever"]);
                assert!(json);
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_catalog_subcommand() {
        let args = Args::parse_from(["mediscan", "catalog", "Abdomen"]);
        match args.command {
            Some(Commands::Catalog { region }) => {
                assert_eq!(region.as_deref(), Some("Abdomen"));
            }
            _ => panic!("expected catalog subcommand"),
        }
    }

    #[test]
    fn test_verbosity_flags() {
        let quiet = Args::parse_from(["mediscan", "-q"]);
        assert_eq!(quiet.verbosity(), Verbosity::Quiet);

        let verbose = Args::parse_from(["mediscan", "-v"]);
        assert_eq!(verbose.verbosity(), Verbosity::Verbose);

        // Quiet wins over verbose.
        let both = Args::parse_from(["mediscan", "-q", "-v"]);
        assert_eq!(both.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_config_override_path() {
        let args = Args::parse_from(["mediscan", "--config", "/tmp/custom.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/custom.toml")));
    }
}

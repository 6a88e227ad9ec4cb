//! CLI argument definitions.
//!
//! There are no subcommands and no selection flags: a run always executes
//! every provisioning pass, in the fixed order. The only arguments are
//! output controls and the settings file override.

use clap::Parser;
use std::path::PathBuf;

/// Basecamp - Idempotent macOS workstation bootstrap.
#[derive(Debug, Parser)]
#[command(name = "basecamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides ~/.config/basecamp/config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stream package manager output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["basecamp"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::try_parse_from(["basecamp", "--verbose", "--no-color", "--debug"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["basecamp", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["basecamp", "run"]).is_err());
    }

    #[test]
    fn accepts_config_path() {
        let cli = Cli::try_parse_from(["basecamp", "--config", "/tmp/camp.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/camp.yml")));
    }
}

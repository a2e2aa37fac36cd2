//! CLI argument parsing for lockfile-sync.
//!
//! Uses clap derive macros for declarative argument definitions. Every flag
//! is optional: running with no arguments syncs the default project with the
//! default install command.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Re-sync a project's lockfile by running its package manager's install command.
///
/// Runs the install command inside the project directory, prints a status
/// line followed by the command's captured output, and exits 0 on success
/// or 1 if the install failed or could not be started.
#[derive(Parser, Debug)]
#[command(name = "lockfile-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file overriding the built-in defaults.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory to run the install in (overrides the config file).
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_arguments() {
        let cli = Cli::try_parse_from(["lockfile-sync"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.project_dir.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_config_and_project_dir() {
        let cli = Cli::try_parse_from([
            "lockfile-sync",
            "--config",
            "sync.yaml",
            "-C",
            "/srv/web",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("sync.yaml")));
        assert_eq!(cli.project_dir, Some(PathBuf::from("/srv/web")));
    }

    #[test]
    fn parse_repeated_verbose() {
        let cli = Cli::try_parse_from(["lockfile-sync", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn reject_positional_arguments() {
        assert!(Cli::try_parse_from(["lockfile-sync", "install"]).is_err());
    }
}

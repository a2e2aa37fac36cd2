//! lockfile-sync: re-sync a project's lockfile by running its package
//! manager's install command.
//!
//! This is the main entry point for the `lockfile-sync` CLI. It parses
//! arguments, runs the sync, and maps the outcome to an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod install;
pub mod logging;
pub mod report;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match commands::cmd_sync(&cli, &mut stdout) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Install failures were already printed alongside the status banners.
            if !err.is_install_failure() {
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

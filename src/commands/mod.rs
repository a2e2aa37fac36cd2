//! The sync command.
//!
//! Resolves configuration, checks the project directory, runs the install
//! and prints its outcome. Errors are returned to the entry point, which
//! owns the mapping to an exit code.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::install::{self, InstallOutput};
use crate::report::{self, Banner};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};


/// Build the effective config: defaults, then `--config`, then `--project-dir`.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(dir) = &cli.project_dir {
        config = config.with_project_dir(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Run one lockfile sync, writing status text to `out`.
///
/// A missing or inaccessible project directory fails before anything is
/// printed. Install failures are printed to `out` and then returned.
pub fn cmd_sync(cli: &Cli, out: &mut dyn Write) -> Result<InstallOutput> {
    let config = resolve_config(cli)?;
    let spec = config.install_spec()?;
    let prepared = install::prepare(&spec)?;

    let banner = Banner::from_config(&config);
    report::announce(out, &banner, prepared.command())?;

    let result = prepared.run();
    report::outcome(out, &banner, &result)?;
    out.flush()?;

    let output = result?;
    if !output.stderr.trim().is_empty() {
        debug!(stderr = %output.stderr.trim(), "install command wrote to stderr");
    }
    check_lockfile(&spec.project_dir, &config.lockfile);
    debug!(
        duration_ms = output.duration.as_millis() as u64,
        "lockfile sync complete"
    );
    Ok(output)
}

fn check_lockfile(project_dir: &Path, lockfile: &str) {
    let path = project_dir.join(lockfile);
    if !path.is_file() {
        warn!(
            lockfile = %path.display(),
            "install succeeded but the lockfile was not found"
        );
    }
}

//! Status text for an install run.
//!
//! Everything here is written to a caller-supplied writer (stdout in the
//! binary) so that the printed text can be checked in tests. Setup failures
//! are not rendered here; the entry point prints those on stderr.

use crate::config::Config;
use crate::error::SyncError;
use crate::install::{InstallCommand, InstallOutput};
use std::io::{self, Write};

/// Wording shared by every status line of a run.
#[derive(Debug, Clone)]
pub struct Banner {
    pub prefix: String,
    pub lockfile: String,
    pub manifest: String,
}

impl Banner {
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefix: config.banner_prefix.clone(),
            lockfile: config.lockfile.clone(),
            manifest: config.manifest.clone(),
        }
    }

    fn line(&self, text: &str) -> String {
        if self.prefix.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.prefix, text)
        }
    }
}

/// Print the line shown before the install command starts.
pub fn announce(out: &mut dyn Write, banner: &Banner, command: &InstallCommand) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        banner.line(&format!(
            "Running {} to sync {}...",
            command, banner.lockfile
        ))
    )
}

/// Print the outcome of an install run.
///
/// Success prints the captured stdout, a failed command prints its captured
/// stderr, and a launch failure prints the fault description. Any other
/// error prints nothing.
pub fn outcome(
    out: &mut dyn Write,
    banner: &Banner,
    result: &Result<InstallOutput, SyncError>,
) -> io::Result<()> {
    match result {
        Ok(output) => {
            writeln!(
                out,
                "{}",
                banner.line(&format!(
                    "Success! {} has been synced with {}",
                    banner.lockfile, banner.manifest
                ))
            )?;
            write_captured(out, &output.stdout)
        }
        Err(SyncError::CommandFailed {
            command, stderr, ..
        }) => {
            writeln!(out, "{}", banner.line(&format!("Error running {}:", command)))?;
            write_captured(out, stderr)
        }
        Err(err @ SyncError::Launch { .. }) => {
            writeln!(out, "{}", banner.line(&format!("Error: {}", err)))
        }
        Err(_) => Ok(()),
    }
}

fn write_captured(out: &mut dyn Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

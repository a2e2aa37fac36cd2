//! Install runner.
//!
//! Runs the package manager's install command once, synchronously, inside the
//! project directory, and classifies the outcome. The project directory is
//! handed to the child process; the current directory of this process is
//! never changed.

use crate::error::{Result, SyncError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::{debug, info};


/// A package manager invocation: program plus fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    /// Split a command line into program and arguments using shell quoting rules.
    pub fn parse(command: &str) -> Result<Self> {
        let words = shell_words::split(command.trim()).map_err(|e| {
            SyncError::Config(format!(
                "failed to parse install command: {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
                e, command
            ))
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| {
            SyncError::Config(format!(
                "install command is empty after parsing: '{}'",
                command
            ))
        })?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(self.args.iter());
        f.write_str(&shell_words::join(words))
    }
}

/// Everything needed for one install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSpec {
    pub project_dir: PathBuf,
    pub command: InstallCommand,
}

/// Captured result of an install command that exited with code 0.
#[derive(Debug, Clone)]
pub struct InstallOutput {
    /// The command line that was run.
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

/// Check that `dir` exists, is a directory, and can be entered.
///
/// Entering a directory needs search (execute) permission, not read
/// permission: a `0711` directory is usable, a `0744` one is not.
pub fn verify_project_dir(dir: &Path) -> Result<()> {
    let directory_error = |reason: String| SyncError::Directory {
        path: dir.to_path_buf(),
        reason,
    };

    let metadata = std::fs::metadata(dir).map_err(|e| directory_error(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(directory_error("not a directory".to_string()));
    }

    check_searchable(dir).map_err(|e| directory_error(e.to_string()))
}

#[cfg(unix)]
fn check_searchable(dir: &Path) -> std::io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(dir.as_os_str().as_bytes())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // SAFETY: `c_path` is a valid NUL-terminated string for the duration of the call.
    if unsafe { libc::access(c_path.as_ptr(), libc::X_OK) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_searchable(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// An install whose project directory has been checked but whose command
/// has not been started yet.
#[derive(Debug)]
pub struct PreparedInstall<'a> {
    spec: &'a InstallSpec,
}

/// Check the project directory of `spec` without launching anything.
///
/// # Returns
///
/// * `Ok(PreparedInstall)` - The directory exists and can be entered
/// * `Err(SyncError::Directory)` - The project directory is unusable
pub fn prepare(spec: &InstallSpec) -> Result<PreparedInstall<'_>> {
    verify_project_dir(&spec.project_dir)?;
    Ok(PreparedInstall { spec })
}

impl PreparedInstall<'_> {
    pub fn command(&self) -> &InstallCommand {
        &self.spec.command
    }

    /// Run the install command and wait for it to finish.
    ///
    /// There is no timeout: a child that never exits blocks this call forever.
    ///
    /// # Returns
    ///
    /// * `Ok(InstallOutput)` - The command exited with code 0
    /// * `Err(SyncError::Launch)` - The command could not be started
    /// * `Err(SyncError::CommandFailed)` - The command exited non-zero or was killed
    pub fn run(self) -> Result<InstallOutput> {
        let spec = self.spec;
        let command_line = spec.command.to_string();
        debug!(
            command = %command_line,
            project_dir = %spec.project_dir.display(),
            "launching install command"
        );

        let start_time = Instant::now();
        let output = Command::new(&spec.command.program)
            .args(&spec.command.args)
            .current_dir(&spec.project_dir)
            .output()
            .map_err(|e| SyncError::Launch {
                command: command_line.clone(),
                source: e,
            })?;
        let duration = start_time.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        info!(
            command = %command_line,
            exit_code = ?exit_code,
            duration_ms = duration.as_millis() as u64,
            "install command finished"
        );

        if !output.status.success() {
            return Err(SyncError::CommandFailed {
                command: command_line,
                code: exit_code,
                stderr,
            });
        }

        Ok(InstallOutput {
            command: command_line,
            stdout,
            stderr,
            duration,
        })
    }
}

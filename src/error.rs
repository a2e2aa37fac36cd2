//! Error types for the lockfile-sync CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code; the
//! entry point is the only place that performs that mapping.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lockfile-sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Configuration file unreadable, unparsable, or holding invalid values.
    #[error("{0}")]
    Config(String),

    /// The project directory does not exist, is not a directory, or cannot be read.
    #[error("cannot use project directory '{}': {reason}", .path.display())]
    Directory { path: PathBuf, reason: String },

    /// The install command could not be started at all.
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The install command ran and exited unsuccessfully.
    #[error("'{command}' {}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Writing status text to the terminal failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// A failing install always yields `INSTALL_FAILURE`, whatever code the
    /// child itself returned.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::Config(_) => exit_codes::SETUP_FAILURE,
            SyncError::Directory { .. } => exit_codes::SETUP_FAILURE,
            SyncError::Launch { .. } => exit_codes::INSTALL_FAILURE,
            SyncError::CommandFailed { .. } => exit_codes::INSTALL_FAILURE,
            SyncError::Output(_) => exit_codes::INSTALL_FAILURE,
        }
    }

    /// Whether this is an install failure whose diagnostic is printed with the
    /// status banners on stdout, rather than by the entry point on stderr.
    pub fn is_install_failure(&self) -> bool {
        matches!(
            self,
            SyncError::Launch { .. } | SyncError::CommandFailed { .. }
        )
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Result type alias for lockfile-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

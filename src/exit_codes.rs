//! Exit code constants for the lockfile-sync CLI.
//!
//! - 0: Success
//! - 1: Install failure (command exited non-zero or could not be launched)
//! - 2: Setup failure (project directory unusable or invalid configuration)

/// The install command exited with code 0.
pub const SUCCESS: i32 = 0;

/// The install command exited non-zero, or could not be launched at all.
pub const INSTALL_FAILURE: i32 = 1;

/// The project directory is missing or inaccessible, or the config is invalid.
pub const SETUP_FAILURE: i32 = 2;

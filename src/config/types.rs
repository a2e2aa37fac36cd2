//! Default values for the Config struct.

use std::path::PathBuf;

/// Project root the install command runs in when nothing overrides it.
pub const DEFAULT_PROJECT_DIR: &str = "/vercel/share/v0-project";

/// Install command run when nothing overrides it.
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";

pub fn default_project_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT_DIR)
}

pub fn default_install_command() -> String {
    DEFAULT_INSTALL_COMMAND.to_string()
}

pub fn default_lockfile() -> String {
    "package-lock.json".to_string()
}

pub fn default_manifest() -> String {
    "package.json".to_string()
}

pub fn default_banner_prefix() -> String {
    "[v0]".to_string()
}

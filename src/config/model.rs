//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a lockfile sync run.
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the install command runs in.
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Package manager invocation, split into words with shell quoting rules.
    #[serde(default = "default_install_command")]
    pub install_command: String,

    /// Lockfile the install is expected to (re)write, relative to `project_dir`.
    #[serde(default = "default_lockfile")]
    pub lockfile: String,

    /// Manifest the lockfile is synced against. Only used in messages.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Tag printed before every status line.
    #[serde(default = "default_banner_prefix")]
    pub banner_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_dir: default_project_dir(),
            install_command: default_install_command(),
            lockfile: default_lockfile(),
            manifest: default_manifest(),
            banner_prefix: default_banner_prefix(),
        }
    }
}

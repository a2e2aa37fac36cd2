//! Config loading, validation, and conversion into a runnable install spec.

use super::model::Config;
use crate::error::{Result, SyncError};
use crate::install::{InstallCommand, InstallSpec};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SyncError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SyncError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `project_dir` must be non-empty
    /// - `install_command` must split into at least one word
    /// - `lockfile` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.project_dir.as_os_str().is_empty() {
            return Err(SyncError::Config(
                "config validation failed: project_dir must not be empty".to_string(),
            ));
        }

        if self.lockfile.trim().is_empty() {
            return Err(SyncError::Config(
                "config validation failed: lockfile must not be empty".to_string(),
            ));
        }

        self.command()?;
        Ok(())
    }

    /// Replace the project directory, e.g. from a command-line flag.
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    /// Parse `install_command` into a program and its arguments.
    pub fn command(&self) -> Result<InstallCommand> {
        InstallCommand::parse(&self.install_command)
    }

    /// Build the spec the install runner executes.
    pub fn install_spec(&self) -> Result<InstallSpec> {
        self.validate()?;
        Ok(InstallSpec {
            project_dir: self.project_dir.clone(),
            command: self.command()?,
        })
    }
}

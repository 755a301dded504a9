//! Config discovery, loading, and validation.

use super::model::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::outcome::TracePolicy;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no explicit config is named.
pub const CONFIG_FILE_NAME: &str = "piperun.yaml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PIPERUN_CONFIG";

/// Environment variable overriding `engine.command`.
pub const ENGINE_ENV: &str = "PIPERUN_ENGINE";

impl RunnerConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RunnerError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            RunnerError::Config(msg) => RunnerError::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RunnerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| RunnerError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `engine.command`, when set, must not be blank
    /// - `engine.timeout_seconds`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        if let Some(command) = &self.engine.command
            && command.trim().is_empty()
        {
            return Err(RunnerError::Config(
                "config validation failed: engine.command must not be empty".to_string(),
            ));
        }

        if self.engine.timeout_seconds == Some(0) {
            return Err(RunnerError::Config(
                "config validation failed: engine.timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Find and load the config for a run in `working_dir`.
    ///
    /// Lookup order:
    /// 1. the file named by `PIPERUN_CONFIG` (must exist)
    /// 2. `piperun.yaml` in `working_dir`, if present
    /// 3. defaults
    ///
    /// `PIPERUN_ENGINE` then overrides `engine.command`.
    pub fn discover(working_dir: &Path) -> Result<Self> {
        Self::discover_with(working_dir, |key| std::env::var(key).ok())
    }

    /// Same as [`RunnerConfig::discover`], reading variables through `lookup`.
    pub fn discover_with<F>(working_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = lookup(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let local = working_dir.join(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::load(local)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(command) = lookup(ENGINE_ENV).filter(|v| !v.trim().is_empty()) {
            config.engine.command = Some(command);
        }

        Ok(config)
    }

    /// The trace gate derived from this config.
    pub fn trace_policy(&self) -> TracePolicy {
        TracePolicy::new(self.trace_threshold)
    }
}

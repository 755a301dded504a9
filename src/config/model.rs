//! Config struct definitions and default implementations.

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::outcome::DEFAULT_TRACE_THRESHOLD;
use serde::Deserialize;

/// Configuration for piperun.
///
/// Both levels are on the engine's severity scale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Log level used when `--loglevel` is not given.
    #[serde(default = "default_log_level")]
    pub default_log_level: i32,

    /// Failures print a full trace when the requested level is below this.
    #[serde(default = "default_trace_threshold")]
    pub trace_threshold: i32,

    /// How to reach the pipeline engine.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// External engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine command line, split with shell-word rules.
    #[serde(default)]
    pub command: Option<String>,

    /// Kill the engine and fail the run after this many seconds.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_log_level() -> i32 {
    DEFAULT_LOG_LEVEL
}

fn default_trace_threshold() -> i32 {
    DEFAULT_TRACE_THRESHOLD
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            default_log_level: default_log_level(),
            trace_threshold: default_trace_threshold(),
            engine: EngineConfig::default(),
        }
    }
}

//! Configuration model for piperun.
//!
//! This module defines the `RunnerConfig` struct that represents `piperun.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{EngineConfig, RunnerConfig};
pub use operations::{CONFIG_ENV, CONFIG_FILE_NAME, ENGINE_ENV};

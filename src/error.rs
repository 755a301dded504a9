//! Error types for the piperun CLI.
//!
//! Uses thiserror for derive macros. Every error falls into one of three
//! failure kinds, and the kind alone decides the exit code (see `outcome`).

use thiserror::Error;

/// The closed set of ways an invocation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller got the invocation wrong. Detected before any pipeline runs.
    Usage,
    /// The operator aborted the run.
    Interrupt,
    /// Everything else.
    Other,
}

/// Main error type for piperun operations.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Malformed or incomplete command line. Also carries `--help`/`--version`
    /// requests, which clap reports through the same channel.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Interrupt received while the pipeline was running.
    #[error("interrupted")]
    Interrupted,

    /// The pipeline engine reported a failure.
    #[error(transparent)]
    Engine(#[from] anyhow::Error),

    /// Configuration could not be read or is invalid.
    #[error("{0}")]
    Config(String),

    /// Logging could not be configured.
    #[error("failed to configure logging: {0}")]
    Logging(String),

    /// The process environment is unusable (e.g. no current directory).
    #[error("{0}")]
    Environment(String),
}

impl RunnerError {
    /// Classify this error into its failure kind.
    pub fn kind(&self) -> FailureKind {
        match self {
            RunnerError::Usage(_) => FailureKind::Usage,
            RunnerError::Interrupted => FailureKind::Interrupt,
            RunnerError::Engine(_)
            | RunnerError::Config(_)
            | RunnerError::Logging(_)
            | RunnerError::Environment(_) => FailureKind::Other,
        }
    }
}

/// Result type alias for piperun operations.
pub type Result<T> = std::result::Result<T, RunnerError>;

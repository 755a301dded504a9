//! Logging bootstrap.
//!
//! Piperun takes a numeric log level on the command line, on the engine's
//! scale (10 debug, 20 info, 25 notify, 30 warning, 40 error, 50 critical),
//! and maps it onto a `tracing` level filter. Console output goes to stderr;
//! `--logpath` adds a second, plain-text layer appending to a file.

use crate::error::{Result, RunnerError};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, fmt};

/// Level used when neither the command line nor the config names one.
pub const DEFAULT_LOG_LEVEL: i32 = 25;

/// Configures process-wide diagnostic output. Called once per invocation,
/// before the pipeline engine runs.
pub trait LogBootstrapper {
    fn configure(&self, log_level: Option<i32>, log_path: Option<&str>) -> Result<()>;
}

impl<T: LogBootstrapper + ?Sized> LogBootstrapper for &T {
    fn configure(&self, log_level: Option<i32>, log_path: Option<&str>) -> Result<()> {
        (**self).configure(log_level, log_path)
    }
}

/// Map an engine log level onto a tracing filter.
pub fn level_filter(level: i32) -> LevelFilter {
    match level {
        i32::MIN..=9 => LevelFilter::TRACE,
        10..=19 => LevelFilter::DEBUG,
        20..=29 => LevelFilter::INFO,
        30..=39 => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}

/// Installs a global `tracing-subscriber` registry.
#[derive(Debug, Clone)]
pub struct TracingBootstrapper {
    default_level: i32,
}

impl TracingBootstrapper {
    pub fn new(default_level: i32) -> Self {
        Self { default_level }
    }
}

impl Default for TracingBootstrapper {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl LogBootstrapper for TracingBootstrapper {
    fn configure(&self, log_level: Option<i32>, log_path: Option<&str>) -> Result<()> {
        let level = log_level.unwrap_or(self.default_level);
        let filter = level_filter(level);

        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter);

        let file = match log_path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        RunnerError::Logging(format!("failed to open log file '{}': {}", path, e))
                    })?;
                Some(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_filter(filter),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(console)
            .with(file)
            .try_init()
            .map_err(|e| RunnerError::Logging(e.to_string()))?;

        tracing::debug!(level, ?log_path, "logging configured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn level_boundaries() {
        assert_eq!(level_filter(-1), LevelFilter::TRACE);
        assert_eq!(level_filter(5), LevelFilter::TRACE);
        assert_eq!(level_filter(10), LevelFilter::DEBUG);
        assert_eq!(level_filter(19), LevelFilter::DEBUG);
        assert_eq!(level_filter(20), LevelFilter::INFO);
        assert_eq!(level_filter(DEFAULT_LOG_LEVEL), LevelFilter::INFO);
        assert_eq!(level_filter(30), LevelFilter::WARN);
        assert_eq!(level_filter(40), LevelFilter::ERROR);
        assert_eq!(level_filter(50), LevelFilter::ERROR);
    }

    #[test]
    fn unopenable_log_path_is_a_logging_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("run.log");

        let err = TracingBootstrapper::default()
            .configure(Some(20), Some(path.to_str().unwrap()))
            .unwrap_err();

        assert!(matches!(err, RunnerError::Logging(_)));
        assert!(err.to_string().contains("failed to open log file"));
    }

    // The only test in this crate that installs the global subscriber.
    #[test]
    fn configure_writes_to_log_file_and_only_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run.log");
        let path_str = path.to_str().unwrap();
        let bootstrapper = TracingBootstrapper::default();

        bootstrapper.configure(Some(20), Some(path_str)).unwrap();
        tracing::info!("pipeline output goes here");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("pipeline output goes here"));
        assert!(!content.contains("\u{1b}["), "file output must not carry ANSI codes");

        let err = bootstrapper.configure(Some(20), None).unwrap_err();
        assert!(matches!(err, RunnerError::Logging(_)));
    }
}

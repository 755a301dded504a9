//! Mapping how a run ended onto an exit code.
//!
//! | Termination  | Exit code | Trace                                  |
//! |--------------|-----------|----------------------------------------|
//! | Completed    | 0         | never                                  |
//! | UsageError   | 2         | never                                  |
//! | Interrupted  | 130       | never                                  |
//! | Failed       | 255       | only when the log level is below the threshold |

use crate::error::{FailureKind, Result};
use crate::exit_codes;

/// Levels strictly below this print a trace on failure.
pub const DEFAULT_TRACE_THRESHOLD: i32 = 10;

/// How an invocation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Completed,
    UsageError,
    Interrupted,
    Failed,
}

impl Termination {
    /// Classify the result of an invocation.
    pub fn classify(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Termination::Completed,
            Err(err) => match err.kind() {
                FailureKind::Usage => Termination::UsageError,
                FailureKind::Interrupt => Termination::Interrupted,
                FailureKind::Other => Termination::Failed,
            },
        }
    }
}

/// Decides whether a failure warrants a full trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracePolicy {
    threshold: i32,
}

impl TracePolicy {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// True only for an explicitly requested level below the threshold.
    pub fn wants_trace(&self, log_level: Option<i32>) -> bool {
        matches!(log_level, Some(level) if level < self.threshold)
    }
}

impl Default for TracePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_THRESHOLD)
    }
}

/// What the process should do on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitPlan {
    pub exit_code: i32,
    pub print_trace: bool,
}

/// Compute the exit code and trace decision for a termination.
pub fn plan(termination: Termination, log_level: Option<i32>, policy: TracePolicy) -> ExitPlan {
    match termination {
        Termination::Completed => ExitPlan {
            exit_code: exit_codes::SUCCESS,
            print_trace: false,
        },
        Termination::UsageError => ExitPlan {
            exit_code: exit_codes::USAGE,
            print_trace: false,
        },
        Termination::Interrupted => ExitPlan {
            exit_code: exit_codes::INTERRUPTED,
            print_trace: false,
        },
        Termination::Failed => ExitPlan {
            exit_code: exit_codes::FAILURE,
            print_trace: policy.wants_trace(log_level),
        },
    }
}

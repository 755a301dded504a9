//! Process entry: normalize, wire, dispatch, map the outcome.
//!
//! This is the only place that catches failures. Everything below it
//! propagates with `?`.

use crate::cli;
use crate::dispatch::{Collaborators, dispatch};
use crate::error::{Result, RunnerError};
use crate::exit_codes;
use crate::outcome::{self, Termination, TracePolicy};
use crate::request::InvocationRequest;
use std::env;
use std::ffi::OsString;
use std::io::Write;

/// Run one invocation and return the process exit code.
///
/// `args` excludes the program name; `None` reads the process arguments.
/// `wire` builds the collaborators once the request is known, so a broken
/// configuration can never hide a usage error. Diagnostics go to `diag`.
pub fn run<'a, F>(args: Option<Vec<OsString>>, diag: &mut dyn Write, wire: F) -> i32
where
    F: FnOnce(&InvocationRequest) -> Result<Collaborators<'a>>,
{
    let args = args.unwrap_or_else(|| env::args_os().skip(1).collect());

    let request = match cli::normalize(args) {
        Ok(request) => request,
        Err(RunnerError::Usage(err)) if !err.use_stderr() => {
            // --help / --version
            let _ = err.print();
            return exit_codes::SUCCESS;
        }
        Err(err) => return finish(Err(err), None, TracePolicy::default(), diag),
    };

    let mut policy = TracePolicy::default();
    let result = wire(&request).and_then(|collaborators| {
        policy = collaborators.trace;
        dispatch(&request, &collaborators)
    });

    finish(result, request.log_level(), policy, diag)
}

fn finish(
    result: Result<()>,
    log_level: Option<i32>,
    policy: TracePolicy,
    diag: &mut dyn Write,
) -> i32 {
    let exit = outcome::plan(Termination::classify(&result), log_level, policy);
    if let Err(err) = result {
        report(err, exit.print_trace, diag);
    }
    exit.exit_code
}

/// Write the diagnostic for a failed invocation.
fn report(err: RunnerError, print_trace: bool, diag: &mut dyn Write) {
    let _ = match err {
        RunnerError::Usage(usage) => write!(diag, "{}", usage),
        RunnerError::Interrupted => writeln!(diag, "Interrupted."),
        err if print_trace => writeln!(diag, "Error: {:?}", full_report(err)),
        err => writeln!(diag, "Error: {}", err),
    };
}

/// The error with its whole cause chain (and backtrace, when enabled).
fn full_report(err: RunnerError) -> anyhow::Error {
    match err {
        RunnerError::Engine(inner) => inner,
        other => anyhow::Error::new(other),
    }
}

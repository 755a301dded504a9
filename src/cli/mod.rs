//! CLI argument parsing for piperun.
//!
//! Uses clap derive macros for declarative argument definitions. Flag aliases
//! are declared next to the field they write, so `--log` and `--logl` resolve
//! to `log_level` inside the parser before any validation runs.
//!
//! Positionals may appear before, after, or between flags: the first one is
//! the pipeline name and every later one is appended to the context args.

use crate::error::{Result, RunnerError};
use crate::request::InvocationRequest;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Program name used when clap renders usage and version text.
pub const BIN_NAME: &str = "piperun";

/// Piperun: run a named pipeline.
///
/// Everything after the pipeline name that is not a flag is passed to the
/// pipeline verbatim as context arguments.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of the pipeline to run.
    #[arg(value_name = "PIPELINE_NAME", value_parser = NonEmptyStringValueParser::new())]
    pub pipeline_name: String,

    /// Context arguments passed to the pipeline, in order.
    #[arg(value_name = "CONTEXT_ARGS", allow_negative_numbers = true)]
    pub context_args: Vec<String>,

    /// Integer log level: 10 debug, 20 info, 25 notify, 30 warning, 40 error,
    /// 50 critical. Below 10 also prints a full trace on failure.
    #[arg(
        long = "loglevel",
        visible_aliases = ["log", "logl"],
        value_name = "LEVEL",
        allow_negative_numbers = true
    )]
    pub log_level: Option<i32>,

    /// Also write log output to this file.
    #[arg(long = "logpath", visible_alias = "logp", value_name = "PATH")]
    pub log_path: Option<String>,

    /// Working directory for the pipeline (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Step groups to run, in order.
    #[arg(long, num_args = 1.., value_name = "GROUP")]
    pub groups: Option<Vec<String>>,

    /// Step group to run when the pipeline succeeds.
    #[arg(long = "success", value_name = "GROUP")]
    pub success_group: Option<String>,

    /// Step group to run when the pipeline fails.
    #[arg(long = "failure", value_name = "GROUP")]
    pub failure_group: Option<String>,
}

impl Cli {
    /// Turn parsed arguments into a request, resolving the working directory.
    ///
    /// The current directory is read here, at parse time.
    pub fn into_request(self) -> Result<InvocationRequest> {
        let working_dir = match self.dir {
            Some(dir) => dir,
            None => env::current_dir().map_err(|e| {
                RunnerError::Environment(format!(
                    "failed to get current working directory: {}",
                    e
                ))
            })?,
        };

        Ok(InvocationRequest::new(
            self.pipeline_name,
            self.context_args,
            working_dir,
            self.log_level,
            self.log_path,
            self.groups,
            self.success_group,
            self.failure_group,
        ))
    }
}

/// Normalize raw tokens (without the program name) into a request.
///
/// Any parse problem comes back as [`RunnerError::Usage`], including the
/// `--help`/`--version` display requests; callers tell those apart with
/// `clap::Error::use_stderr`.
pub fn normalize<I, T>(args: I) -> Result<InvocationRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));
    Cli::try_parse_from(argv)?.into_request()
}

//! The normalized invocation request.
//!
//! An `InvocationRequest` can only be built by the argument normalizer in
//! [`crate::cli`], which guarantees the pipeline name is present and
//! non-empty. Fields are read through accessors.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One invocation of piperun, after argument normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pipeline_name: String,
    context_args: Vec<String>,
    working_dir: PathBuf,
    log_level: Option<i32>,
    log_path: Option<String>,
    groups: Option<Vec<String>>,
    success_group: Option<String>,
    failure_group: Option<String>,
}

impl InvocationRequest {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        pipeline_name: String,
        context_args: Vec<String>,
        working_dir: PathBuf,
        log_level: Option<i32>,
        log_path: Option<String>,
        groups: Option<Vec<String>>,
        success_group: Option<String>,
        failure_group: Option<String>,
    ) -> Self {
        debug_assert!(!pipeline_name.is_empty());
        Self {
            pipeline_name,
            context_args,
            working_dir,
            log_level,
            log_path,
            groups,
            success_group,
            failure_group,
        }
    }

    /// Name of the pipeline to run.
    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    /// Free-form positional arguments, in the order they were given.
    pub fn context_args(&self) -> &[String] {
        &self.context_args
    }

    /// Directory the pipeline runs in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Requested severity threshold. `None` means the engine default.
    pub fn log_level(&self) -> Option<i32> {
        self.log_level
    }

    /// Extra log destination besides the console.
    pub fn log_path(&self) -> Option<&str> {
        self.log_path.as_deref()
    }

    /// Step groups to run. `None` means the pipeline's default groups.
    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    pub fn success_group(&self) -> Option<&str> {
        self.success_group.as_deref()
    }

    pub fn failure_group(&self) -> Option<&str> {
        self.failure_group.as_deref()
    }

    /// The part of the request the engine receives.
    pub fn engine_call(&self) -> EngineCall<'_> {
        EngineCall {
            pipeline_name: &self.pipeline_name,
            context_args: &self.context_args,
            working_dir: &self.working_dir,
            groups: self.groups.as_deref(),
            success_group: self.success_group.as_deref(),
            failure_group: self.failure_group.as_deref(),
        }
    }
}

/// Borrowed view of a request, as handed to a [`crate::engine::PipelineEngine`].
///
/// Logging fields are not included; logging is configured before the engine
/// is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineCall<'a> {
    pub pipeline_name: &'a str,
    pub context_args: &'a [String],
    pub working_dir: &'a Path,
    pub groups: Option<&'a [String]>,
    pub success_group: Option<&'a str>,
    pub failure_group: Option<&'a str>,
}

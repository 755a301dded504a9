//! Hands a normalized request to the pipeline engine.

use crate::engine::PipelineEngine;
use crate::error::Result;
use crate::logging::LogBootstrapper;
use crate::outcome::TracePolicy;
use crate::request::InvocationRequest;

/// The collaborators one invocation runs against.
pub struct Collaborators<'a> {
    pub logger: Box<dyn LogBootstrapper + 'a>,
    pub engine: Box<dyn PipelineEngine + 'a>,
    pub trace: TracePolicy,
}

/// Configure logging once, then run the engine once.
///
/// No retries and no interpretation of the engine's result: failures
/// propagate to the caller unchanged.
pub fn dispatch(request: &InvocationRequest, collaborators: &Collaborators<'_>) -> Result<()> {
    collaborators
        .logger
        .configure(request.log_level(), request.log_path())?;

    tracing::info!(
        pipeline = request.pipeline_name(),
        dir = %request.working_dir().display(),
        "running pipeline"
    );
    tracing::debug!(
        context_args = ?request.context_args(),
        groups = ?request.groups(),
        success_group = ?request.success_group(),
        failure_group = ?request.failure_group(),
        "engine call"
    );

    collaborators.engine.run(&request.engine_call())?;

    tracing::info!(pipeline = request.pipeline_name(), "pipeline done");
    Ok(())
}

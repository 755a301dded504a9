//! The pipeline engine seam.
//!
//! Piperun does not execute pipelines itself. It hands an [`EngineCall`] to
//! a [`PipelineEngine`] and only looks at whether the call completed, was
//! interrupted, or failed.

mod command;

pub use command::CommandEngine;

use crate::error::RunnerError;
use crate::request::EngineCall;
use thiserror::Error;

/// How an engine run can end other than normally.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The run was cut short by an operator interrupt.
    #[error("pipeline interrupted")]
    Interrupted,

    /// Anything else the engine raised.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl From<EngineError> for RunnerError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Interrupted => RunnerError::Interrupted,
            EngineError::Failed(inner) => RunnerError::Engine(inner),
        }
    }
}

/// Entry point of a pipeline execution engine.
pub trait PipelineEngine {
    /// Run the pipeline to completion. Blocks until the engine is done.
    fn run(&self, call: &EngineCall<'_>) -> Result<(), EngineError>;
}

impl<T: PipelineEngine + ?Sized> PipelineEngine for &T {
    fn run(&self, call: &EngineCall<'_>) -> Result<(), EngineError> {
        (**self).run(call)
    }
}

use crate::engine::{EngineError, PipelineEngine};
use crate::error::{Result, RunnerError};
use crate::logging::LogBootstrapper;
use crate::request::EngineCall;
use std::cell::RefCell;
use std::path::PathBuf;

/// One observed collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Configure {
        log_level: Option<i32>,
        log_path: Option<String>,
    },
    Run {
        pipeline_name: String,
        context_args: Vec<String>,
        working_dir: PathBuf,
        groups: Option<Vec<String>>,
        success_group: Option<String>,
        failure_group: Option<String>,
    },
}

/// Shared, ordered log of calls across the recording doubles.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    calls: RefCell<Vec<Call>>,
}

impl Recorder {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn engine_runs(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Run { .. }))
            .count()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub(crate) struct RecordingLogger<'a> {
    recorder: &'a Recorder,
    fail: bool,
}

impl<'a> RecordingLogger<'a> {
    pub(crate) fn new(recorder: &'a Recorder) -> Self {
        Self {
            recorder,
            fail: false,
        }
    }

    pub(crate) fn failing(recorder: &'a Recorder) -> Self {
        Self {
            recorder,
            fail: true,
        }
    }
}

impl LogBootstrapper for RecordingLogger<'_> {
    fn configure(&self, log_level: Option<i32>, log_path: Option<&str>) -> Result<()> {
        self.recorder.push(Call::Configure {
            log_level,
            log_path: log_path.map(str::to_string),
        });
        if self.fail {
            return Err(RunnerError::Logging("log file unavailable".to_string()));
        }
        Ok(())
    }
}

/// What a [`RecordingEngine`] does when run.
#[derive(Clone, Copy)]
pub(crate) enum EngineOutcome {
    Complete,
    Fail(fn() -> EngineError),
}

pub(crate) struct RecordingEngine<'a> {
    recorder: &'a Recorder,
    outcome: EngineOutcome,
}

impl<'a> RecordingEngine<'a> {
    pub(crate) fn new(recorder: &'a Recorder, outcome: EngineOutcome) -> Self {
        Self { recorder, outcome }
    }
}

impl PipelineEngine for RecordingEngine<'_> {
    fn run(&self, call: &EngineCall<'_>) -> std::result::Result<(), EngineError> {
        self.recorder.push(Call::Run {
            pipeline_name: call.pipeline_name.to_string(),
            context_args: call.context_args.to_vec(),
            working_dir: call.working_dir.to_path_buf(),
            groups: call.groups.map(<[String]>::to_vec),
            success_group: call.success_group.map(str::to_string),
            failure_group: call.failure_group.map(str::to_string),
        });
        match self.outcome {
            EngineOutcome::Complete => Ok(()),
            EngineOutcome::Fail(make_error) => Err(make_error()),
        }
    }
}

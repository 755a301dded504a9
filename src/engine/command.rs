//! External engine process.
//!
//! Runs the configured engine command in the pipeline's working directory,
//! writes the [`EngineCall`] to its stdin as one JSON document, and waits for
//! it to exit. The child inherits stdout and stderr.

use super::{EngineError, PipelineEngine};
use crate::config::{ENGINE_ENV, EngineConfig};
use crate::interrupt;
use crate::request::EngineCall;
use anyhow::{Context, anyhow};
use std::io::{ErrorKind, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Exit code an engine uses to report that it was interrupted.
const ENGINE_INTERRUPTED_CODE: i32 = 130;

#[cfg(unix)]
const SIGINT: i32 = 2;

/// How long to sleep between checks on a running engine.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How waiting on the engine ended.
#[derive(Debug)]
enum Wait {
    Exited(ExitStatus),
    /// Killed after running past the configured timeout.
    TimedOut,
    /// Killed because piperun itself received Ctrl-C.
    Interrupted,
}

/// A [`PipelineEngine`] that delegates to an external program.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    config: EngineConfig,
}

impl CommandEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    fn execute(&self, call: &EngineCall<'_>) -> anyhow::Result<Wait> {
        let command_line = self.config.command.as_deref().ok_or_else(|| {
            anyhow!(
                "no pipeline engine configured\n\
                 Fix: set engine.command in piperun.yaml or the {} environment variable.",
                ENGINE_ENV
            )
        })?;

        // Parse the command using shell-words
        let args = shell_words::split(command_line).with_context(|| {
            format!(
                "failed to parse engine command '{}'\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command_line
            )
        })?;

        let Some((program, program_args)) = args.split_first() else {
            return Err(anyhow!(
                "engine command is empty after parsing: '{}'",
                command_line
            ));
        };

        let payload =
            serde_json::to_vec(call).context("failed to serialize the engine request")?;

        tracing::debug!(program = %program, dir = %call.working_dir.display(), "spawning engine");

        let mut child = Command::new(program)
            .args(program_args)
            .current_dir(call.working_dir)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!(
                    "failed to execute engine command '{}' in '{}'\n\
                     Fix: ensure the command is installed and in PATH, and the directory exists.",
                    program,
                    call.working_dir.display()
                )
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // An engine that never reads its request closes the pipe early.
            if let Err(e) = stdin.write_all(&payload)
                && e.kind() != ErrorKind::BrokenPipe
            {
                kill_process(&mut child);
                return Err(e).context("failed to send the request to the engine");
            }
        }

        let timeout = self.config.timeout_seconds.map(Duration::from_secs);
        wait_with_timeout(&mut child, timeout)
    }
}

impl PipelineEngine for CommandEngine {
    fn run(&self, call: &EngineCall<'_>) -> Result<(), EngineError> {
        let failed = |cause: anyhow::Error| {
            EngineError::Failed(cause.context(format!("pipeline '{}' failed", call.pipeline_name)))
        };

        let wait = self.execute(call).map_err(failed)?;
        if interrupt::was_interrupted() {
            return Err(EngineError::Interrupted);
        }

        match wait {
            Wait::Exited(status) if status.success() => Ok(()),
            Wait::Exited(status) if exited_by_interrupt(&status) => Err(EngineError::Interrupted),
            Wait::Exited(status) => Err(failed(anyhow!("engine exited with {}", status))),
            Wait::TimedOut => Err(failed(anyhow!(
                "engine timed out after {} seconds and was killed",
                self.config.timeout_seconds.unwrap_or_default()
            ))),
            Wait::Interrupted => Err(EngineError::Interrupted),
        }
    }
}

/// Whether the engine ended because of SIGINT, or said so through its exit code.
fn exited_by_interrupt(status: &ExitStatus) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(SIGINT) {
            return true;
        }
    }
    status.code() == Some(ENGINE_INTERRUPTED_CODE)
}

/// Wait for a child process, polling so that a timeout or a Ctrl-C seen by
/// piperun ends the wait. The child is killed in both cases.
fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> anyhow::Result<Wait> {
    let start = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Wait::Exited(status)),
            Ok(None) => {
                if interrupt::was_interrupted() {
                    tracing::debug!(pid = child.id(), "interrupt received, stopping engine");
                    kill_process(child);
                    return Ok(Wait::Interrupted);
                }
                if timeout.is_some_and(|limit| start.elapsed() >= limit) {
                    kill_process(child);
                    return Ok(Wait::TimedOut);
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(e).context("failed to check engine status"),
        }
    }
}

/// Kill a process and wait for it to terminate.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}

//! Piperun binary.
//!
//! Installs the Ctrl-C handler, then runs one invocation against the
//! configured engine and exits with the mapped code.

use piperun::config::RunnerConfig;
use piperun::dispatch::Collaborators;
use piperun::engine::CommandEngine;
use piperun::logging::TracingBootstrapper;
use piperun::{entry, interrupt};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = interrupt::install_handler() {
        eprintln!("Warning: {}", err);
    }

    let code = entry::run(None, &mut std::io::stderr(), |request| {
        let config = RunnerConfig::discover(request.working_dir())?;
        Ok(Collaborators {
            logger: Box::new(TracingBootstrapper::new(config.default_log_level)),
            trace: config.trace_policy(),
            engine: Box::new(CommandEngine::new(config.engine)),
        })
    });

    // Every code in exit_codes fits in a byte.
    ExitCode::from(code as u8)
}

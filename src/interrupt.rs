//! Ctrl-C handling.
//!
//! A terminal interrupt reaches both piperun and the engine child process.
//! The handler only records that it happened, so piperun outlives the child
//! and can report the interrupt through its exit code.

use crate::error::{Result, RunnerError};
use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler. Call once, from `main`.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    })
    .map_err(|e| RunnerError::Environment(format!("failed to install Ctrl-C handler: {}", e)))
}

/// Whether an interrupt has been received since start (or the last reset).
pub fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

#[cfg(test)]
pub(crate) fn set_interrupted(value: bool) {
    INTERRUPTED.store(value, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(interrupt)]
    fn flag_round_trips() {
        set_interrupted(true);
        assert!(was_interrupted());
        set_interrupted(false);
        assert!(!was_interrupted());
    }
}

//! Exit code constants for the piperun CLI.
//!
//! - 0: Success
//! - 2: Usage error (bad or incomplete invocation)
//! - 130: Interrupted (128 + SIGINT)
//! - 255: Any other failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: missing pipeline name, unknown flag, missing or malformed flag value.
pub const USAGE: i32 = 2;

/// The run was interrupted by the operator.
pub const INTERRUPTED: i32 = 130;

/// Anything else: engine failure, configuration or logging setup failure.
pub const FAILURE: i32 = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USAGE, INTERRUPTED, FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_fit_in_a_process_status_byte() {
        for code in [SUCCESS, USAGE, INTERRUPTED, FAILURE] {
            assert!(u8::try_from(code).is_ok());
        }
    }
}

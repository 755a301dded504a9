//! Piperun: command-line front end for a declarative pipeline runner.
//!
//! Turns an invocation into a normalized [`request::InvocationRequest`],
//! configures logging, hands the request to a pipeline engine, and maps how
//! that ended onto a process exit code.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod entry;
pub mod error;
pub mod exit_codes;
pub mod interrupt;
pub mod logging;
pub mod outcome;
pub mod request;

#[cfg(test)]
mod test_support;

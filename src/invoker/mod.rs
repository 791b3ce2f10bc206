//! Formatter invocation module
//!
//! This module contains components for constructing, running, and
//! reporting external formatter invocations.

mod command;
mod report;
mod runner;

pub use command::ToolCommand;
pub use report::{InvocationOutcome, InvocationRecord, RunReport, RunStats};
pub use runner::{RunOptions, format_roots};

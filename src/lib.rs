//! Runs an in-place code formatter across project source trees
//!
//! The crate walks a configurable list of root directories, selects
//! source files by an extension allowlist while excluding hidden names,
//! and invokes an external formatting tool (by default
//! `clang-format -i`) on every candidate, one process at a time.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod invoker;
pub mod logging;
pub mod utils;

pub mod prelude {
    pub use crate::config::{Config, load_config, parse_config, read_or_default};
    pub use crate::discovery::{DiscoveryPolicy, Walker};
    pub use crate::errors::{
        Error, Result, config_parsing_error, directory_not_found_error, file_operation_error,
        generic_error, invalid_filename_error, launch_error, traversal_error,
    };
    pub use crate::invoker::{
        InvocationOutcome, InvocationRecord, RunOptions, RunReport, ToolCommand, format_roots,
    };
    pub use crate::logging::{LogLevel, init_default_logger, init_logger};
}

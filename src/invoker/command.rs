//! External formatter command construction
//!
//! This module builds and runs the command line for one candidate file.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::Config;

/// The external formatter and its fixed arguments
///
/// The candidate path is always appended as the final argument, so the
/// default configuration produces `clang-format -i <path>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    /// Creates a command for the given program and arguments
    pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
        ToolCommand {
            program: program.into(),
            args,
        }
    }

    /// Builds the command described by a configuration
    pub fn from_config(config: &Config) -> Self {
        ToolCommand::new(config.tool.clone(), config.args.clone())
    }

    /// The program name of the external formatter
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Renders the invocation-trace line for one candidate
    ///
    /// This is the line logged before the process is spawned.
    pub fn render(&self, path: &Path) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.push(path.display().to_string());
        parts.join(" ")
    }

    /// Runs the formatter on one candidate, blocking until it exits
    ///
    /// The path is passed as a single argument, so no shell quoting is
    /// involved even when it contains spaces.
    ///
    /// # Errors
    /// Returns the spawn error when the program cannot be started, most
    /// commonly because it is not on the PATH
    pub fn run(&self, path: &Path) -> io::Result<ExitStatus> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_appends_path_last() {
        let command = ToolCommand::new("clang-format", vec!["-i".to_string()]);

        assert_eq!(
            command.render(Path::new("src/main.cpp")),
            "clang-format -i src/main.cpp"
        );
    }

    #[test]
    fn test_render_without_arguments() {
        let command = ToolCommand::new("formatter", Vec::new());

        assert_eq!(command.render(Path::new("a.h")), "formatter a.h");
    }

    #[test]
    fn test_from_config_uses_tool_and_args() {
        let config = Config::default();
        let command = ToolCommand::from_config(&config);

        assert_eq!(command.program(), "clang-format");
        assert_eq!(
            command.render(Path::new("demo/demo.c")),
            "clang-format -i demo/demo.c"
        );
    }
}

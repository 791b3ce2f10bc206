//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_ROOTS, DEFAULT_TOOL, DEFAULT_TOOL_ARGS};
use crate::utils::expand_path;

/// Configuration for the formatting run
///
/// Every field has a default, so an absent configuration file is
/// equivalent to the reference behaviour: format `src` and `demo` with
/// `clang-format -i` on the four C/C++ extensions.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories to walk, in order, resolved against the current
    /// working directory unless absolute
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,
    /// Formatter executable to invoke for every candidate file
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Arguments passed to the formatter before the candidate path
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Extension allowlist; a file is a candidate only if its suffix
    /// after the last `.` appears here
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Whether hidden directories (such as `.git`) are skipped entirely
    #[serde(default = "default_true")]
    pub prune_hidden_dirs: bool,
    /// Whether an unreadable subdirectory aborts the traversal of its
    /// root instead of being skipped with a warning
    #[serde(default)]
    pub strict_traversal: bool,
    /// Whether the first failed invocation aborts the whole run
    #[serde(default)]
    pub halt_on_failure: bool,
}

fn default_roots() -> Vec<PathBuf> {
    DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_args() -> Vec<String> {
    DEFAULT_TOOL_ARGS.iter().map(ToString::to_string).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roots: default_roots(),
            tool: default_tool(),
            args: default_args(),
            extensions: default_extensions(),
            prune_hidden_dirs: true,
            strict_traversal: false,
            halt_on_failure: false,
        }
    }
}

impl Config {
    /// Expands tildes in the configured roots and tool path
    pub fn normalise(&mut self) {
        self.roots = self
            .roots
            .iter()
            .map(|root| expand_path(&root.to_string_lossy()))
            .collect();
        self.tool = expand_path(&self.tool).to_string_lossy().into_owned();
    }

    /// Validates the configuration
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(anyhow!(
                "No root directories specified in configuration. At least one root directory is required."
            ));
        }

        if self.tool.trim().is_empty() {
            return Err(anyhow!(
                "No formatter tool specified in configuration. A tool name is required."
            ));
        }

        if self.extensions.is_empty() {
            return Err(anyhow!(
                "No extensions specified in configuration. At least one extension is required."
            ));
        }

        for (index, extension) in self.extensions.iter().enumerate() {
            if extension.is_empty() {
                return Err(anyhow!("Extension at index {} is empty.", index));
            }
            if extension.starts_with('.') || extension.contains('/') {
                return Err(anyhow!(
                    "Invalid extension '{}' at index {}: the allowlist holds bare suffixes such as 'cpp', not '.cpp' or paths.",
                    extension,
                    index
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_behaviour() {
        let config = Config::default();

        assert_eq!(
            config.roots,
            vec![PathBuf::from("src"), PathBuf::from("demo")]
        );
        assert_eq!(config.tool, "clang-format");
        assert_eq!(config.args, vec!["-i".to_string()]);
        assert_eq!(config.extensions, vec!["h", "hpp", "c", "cpp"]);
        assert!(config.prune_hidden_dirs);
        assert!(!config.strict_traversal);
        assert!(!config.halt_on_failure);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_roots() {
        let config = Config {
            roots: Vec::new(),
            ..Config::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("root"));
    }

    #[test]
    fn test_validate_rejects_empty_tool() {
        let config = Config {
            tool: "  ".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = Config {
            extensions: vec!["cpp".to_string(), ".h".to_string()],
            ..Config::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(".h"));
    }

    #[test]
    fn test_validate_rejects_empty_extension_list() {
        let config = Config {
            extensions: Vec::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}

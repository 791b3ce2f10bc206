//! Candidate selection rules
//!
//! This module defines which files count as formatting candidates and
//! how the traversal treats hidden directories and unreadable subtrees.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::constants::DEFAULT_EXTENSIONS;
use crate::utils::{file_extension, is_hidden_name};

static DEFAULT_ALLOWLIST: Lazy<HashSet<String>> =
    Lazy::new(|| DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect());

/// Rules applied during a traversal
///
/// A file is a candidate iff its own name does not start with `.` and
/// its extension is in the allowlist. Extensions are compared
/// case-sensitively, matching the reference behaviour.
#[derive(Debug, Clone)]
pub struct DiscoveryPolicy {
    /// Extensions (bare suffixes, no leading dot) that mark a candidate
    extensions: HashSet<String>,
    /// Whether hidden directories are skipped instead of recursed into
    pub prune_hidden_dirs: bool,
    /// Whether an unreadable entry aborts the traversal instead of
    /// being skipped
    pub strict: bool,
}

impl Default for DiscoveryPolicy {
    fn default() -> Self {
        DiscoveryPolicy {
            extensions: DEFAULT_ALLOWLIST.clone(),
            prune_hidden_dirs: true,
            strict: false,
        }
    }
}

impl DiscoveryPolicy {
    /// Creates a policy with the given extension allowlist
    pub fn new<I, S>(extensions: I, prune_hidden_dirs: bool, strict: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DiscoveryPolicy {
            extensions: extensions.into_iter().map(Into::into).collect(),
            prune_hidden_dirs,
            strict,
        }
    }

    /// Builds the policy described by a configuration
    pub fn from_config(config: &Config) -> Self {
        DiscoveryPolicy::new(
            config.extensions.iter().cloned(),
            config.prune_hidden_dirs,
            config.strict_traversal,
        )
    }

    /// Checks whether a file path passes the inclusion predicate
    ///
    /// Only the final filename is examined here; hidden parent
    /// directories are handled during traversal.
    pub fn is_candidate(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if is_hidden_name(name) {
            return false;
        }
        file_extension(path).is_some_and(|extension| self.extensions.contains(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowlist_accepts_c_family_files() {
        let policy = DiscoveryPolicy::default();

        assert!(policy.is_candidate(Path::new("src/main.cpp")));
        assert!(policy.is_candidate(Path::new("src/lib.c")));
        assert!(policy.is_candidate(Path::new("include/api.h")));
        assert!(policy.is_candidate(Path::new("include/api.hpp")));
    }

    #[test]
    fn test_default_allowlist_rejects_other_extensions() {
        let policy = DiscoveryPolicy::default();

        assert!(!policy.is_candidate(Path::new("script.py")));
        assert!(!policy.is_candidate(Path::new("main.rs")));
        assert!(!policy.is_candidate(Path::new("README.md")));
    }

    #[test]
    fn test_hidden_files_are_rejected() {
        let policy = DiscoveryPolicy::default();

        assert!(!policy.is_candidate(Path::new(".hidden.h")));
        assert!(!policy.is_candidate(Path::new("src/.generated.cpp")));
    }

    #[test]
    fn test_hidden_parent_does_not_reject_file() {
        // Directory components are handled during traversal, not here
        let policy = DiscoveryPolicy::default();

        assert!(policy.is_candidate(Path::new(".git/hooks.c")));
    }

    #[test]
    fn test_files_without_extension_are_rejected() {
        let policy = DiscoveryPolicy::default();

        assert!(!policy.is_candidate(Path::new("Makefile")));
        assert!(!policy.is_candidate(Path::new("src/h")));
    }

    #[test]
    fn test_extension_comparison_is_case_sensitive() {
        let policy = DiscoveryPolicy::default();

        assert!(!policy.is_candidate(Path::new("main.CPP")));
    }

    #[test]
    fn test_custom_allowlist() {
        let policy = DiscoveryPolicy::new(["rs"], true, false);

        assert!(policy.is_candidate(Path::new("main.rs")));
        assert!(!policy.is_candidate(Path::new("main.cpp")));
    }
}

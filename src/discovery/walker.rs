//! Directory traversal
//!
//! This module contains the lazy walker that yields formatting
//! candidates from a single root directory.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::discovery::DiscoveryPolicy;
use crate::errors::{Result, directory_not_found_error, traversal_error};
use crate::utils::is_hidden_name;

/// Lazy iterator over the formatting candidates beneath one root
///
/// Every yielded path satisfies the policy's inclusion predicate.
/// The traversal is restartable by constructing a new `Walker` for the
/// same root; ordering between entries is whatever the underlying
/// directory walk produces and is not part of the contract.
pub struct Walker {
    root: PathBuf,
    policy: DiscoveryPolicy,
    entries: walkdir::IntoIter,
    done: bool,
}

impl Walker {
    /// Creates a walker for a root directory
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::DirectoryNotFound`] if the root
    /// does not exist or is not a directory. A missing root is an
    /// error, never an empty sequence.
    pub fn new(root: &Path, policy: DiscoveryPolicy) -> Result<Self> {
        if !root.is_dir() {
            return Err(directory_not_found_error(root.to_path_buf()));
        }

        debug!("Walking {}", root.display());

        Ok(Walker {
            root: root.to_path_buf(),
            policy,
            entries: WalkDir::new(root).into_iter(),
            done: false,
        })
    }

    /// The root directory this walker was created for
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let entry = match self.entries.next() {
                None => return None,
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    if self.policy.strict {
                        // Strict mode: surface the error and end this
                        // root's traversal
                        self.done = true;
                        return Some(Err(traversal_error(err, self.root.clone())));
                    }
                    warn!("Skipping unreadable entry under {}: {err}", self.root.display());
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                // Depth 0 is the root itself and is never pruned
                if self.policy.prune_hidden_dirs
                    && entry.depth() > 0
                    && is_hidden_name(entry.file_name())
                {
                    debug!("Pruning hidden directory {}", entry.path().display());
                    self.entries.skip_current_dir();
                }
                continue;
            }

            if entry.file_type().is_file() && self.policy.is_candidate(entry.path()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

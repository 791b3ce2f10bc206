use std::ffi::OsStr;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

/// Checks whether a file or directory name starts with a dot
///
/// The check applies to the name alone, never to parent components.
pub fn is_hidden_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

/// Returns the extension of a path as a string slice, if it has one
///
/// The extension is the suffix after the last `.` of the filename.
/// Dotfiles such as `.gitignore` have no extension.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(OsStr::to_str)
}

/// Expands a leading tilde in a path taken from configuration
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden_name() {
        assert!(is_hidden_name(OsStr::new(".gitignore")));
        assert!(is_hidden_name(OsStr::new(".hidden.h")));
        assert!(!is_hidden_name(OsStr::new("main.cpp")));
        assert!(!is_hidden_name(OsStr::new("dotted.name.h")));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("src/main.cpp")), Some("cpp"));
        assert_eq!(file_extension(Path::new("lib.tar.hpp")), Some("hpp"));
        assert_eq!(file_extension(Path::new("Makefile")), None);
        assert_eq!(file_extension(Path::new(".gitignore")), None);
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("src"), PathBuf::from("src"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/project/src");
        assert!(
            !expanded.to_string_lossy().starts_with('~'),
            "Tilde should be expanded to the home directory"
        );
    }
}

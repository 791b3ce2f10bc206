use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the code formatting application
#[derive(Debug)]
pub enum Error {
    /// Error when a root directory is missing or not a directory
    DirectoryNotFound { path: PathBuf },
    /// Error while walking a directory tree
    Traversal {
        source: walkdir::Error,
        root: PathBuf,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when the external formatter could not be started
    Launch {
        source: io::Error,
        command: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::Traversal { root, source } => {
                write!(f, "Failed to walk {}: {source}", root.display())
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Launch { command, source } => {
                write!(f, "Failed to launch '{command}': {source}")
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Traversal { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::Launch { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the code formatting application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most
/// functions that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a traversal error
pub fn traversal_error(err: walkdir::Error, root: PathBuf) -> Error {
    Error::Traversal { source: err, root }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a launch error
pub fn launch_error(err: io::Error, command: &str) -> Error {
    Error::Launch {
        source: err,
        command: command.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_error() {
        let error = directory_not_found_error(PathBuf::from("/test/nonexistent"));

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/nonexistent"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_launch_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = launch_error(io_error, "clang-format -i a.cpp");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("clang-format -i a.cpp"),
            "Error message should contain the command line"
        );
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "Missing required field");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Missing required field"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Something went wrong"),
            "Error message should contain the message"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );
    }
}

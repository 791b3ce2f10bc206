/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "codetools";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "code_format";

/// External formatter invoked when no tool is configured
pub const DEFAULT_TOOL: &str = "clang-format";

/// Arguments passed to the default formatter before the candidate path
///
/// `-i` asks clang-format to rewrite the file in place.
pub const DEFAULT_TOOL_ARGS: &[&str] = &["-i"];

/// Extensions recognised as source files when no allowlist is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["h", "hpp", "c", "cpp"];

/// Directories formatted when no roots are configured
///
/// Both are resolved against the current working directory at startup.
pub const DEFAULT_ROOTS: &[&str] = &["src", "demo"];

/// Help text for the roots positional argument
pub const ROOTS_HELP: &str = "Directories to format (overrides the configured roots)";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the tool command-line option
pub const TOOL_HELP: &str = "Formatter executable to invoke (overrides the configured tool)";

/// Help text for the extension command-line option
pub const EXTENSION_HELP: &str =
    "File extension to format; may be given multiple times (replaces the configured allowlist)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Print the commands without running the formatter";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file to the current directory instead of the config directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "cfmt.log";

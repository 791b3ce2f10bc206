use atty::Stream;
use clap::{Arg, ArgMatches, command, crate_description, crate_name, crate_version};
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, EXTENSION_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, ROOTS_HELP, TOOL_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `roots`: Directories to format, overriding the configured roots
/// - `config`: Path to the configuration file
/// - `tool`: Formatter executable, overriding the configured tool
/// - `ext`: Extension allowlist entries, replacing the configured ones
/// - `dry`: Trace the commands without running the formatter
/// - `verbose`: Increase verbosity level
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
///
/// # Errors
/// Returns an error if the command-line arguments cannot be parsed
pub fn get_matches() -> Result<ArgMatches> {
    // define positional arg for the root directories
    let arg_roots = Arg::new("roots").help(ROOTS_HELP).num_args(0..);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for overriding the formatter executable
    let arg_tool = Arg::new("tool").short('t').long("tool").help(TOOL_HELP);

    // define arg for replacing the extension allowlist
    let arg_ext = Arg::new("ext")
        .short('e')
        .long("ext")
        .help(EXTENSION_HELP)
        .action(clap::ArgAction::Append);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_roots)
        .arg(arg_config)
        .arg(arg_tool)
        .arg(arg_ext)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the configuration file path from the command-line arguments
pub fn get_config_path(matches: &ArgMatches) -> Result<String> {
    matches
        .get_one::<String>("config")
        .cloned()
        .ok_or_else(|| generic_error("Configuration file option not found"))
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count
/// to a [`LogLevel`].
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path from the command-line arguments
///
/// Unless local logging was requested, the filename is placed in the
/// application's config directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str().ok_or_else(|| {
            generic_error(&format!("Failed to convert path to string: {path:?}"))
        })?;
        Ok(path_str.to_string())
    }
}

/// Applies command-line overrides to a loaded configuration
///
/// Positional roots replace the configured roots, `--tool` replaces the
/// formatter, and any `--ext` occurrences replace the allowlist. The
/// configuration is re-validated afterwards.
///
/// # Errors
/// Returns an error if the overridden configuration fails validation
pub fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(roots) = matches.get_many::<String>("roots") {
        let roots: Vec<PathBuf> = roots.map(|root| expand_path(root)).collect();
        if !roots.is_empty() {
            config.roots = roots;
        }
    }

    if let Some(tool) = matches.get_one::<String>("tool") {
        config.tool = expand_path(tool).to_string_lossy().into_owned();
    }

    if let Some(extensions) = matches.get_many::<String>("ext") {
        config.extensions = extensions.cloned().collect();
    }

    config.validate()?;
    Ok(())
}

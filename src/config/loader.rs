//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use crate::config::Config;
use crate::constants::DEFAULT_CONFIG_PATH;
use crate::utils::find_project_folder;

/// Parses configuration from a YAML string
///
/// # Errors
/// Returns an error if the YAML is malformed or fails validation
pub fn parse_config(text: &str) -> Result<Config> {
    let mut config: Config =
        serde_yaml::from_str(text).context("Failed to parse configuration file")?;
    config.validate()?;
    config.normalise();
    Ok(config)
}

/// Loads configuration from a file
///
/// # Arguments
/// * `path` - The path to the configuration file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_config(path: &Path) -> Result<Config> {
    debug!("Loading configuration from {}", path.display());

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    parse_config(&text)
}

/// Resolves the configuration for a run
///
/// An explicitly given path must exist. The default path is looked up
/// first in the current directory and then in the application's config
/// directory; when neither exists the built-in defaults are used, which
/// reproduce the reference behaviour.
///
/// # Errors
/// Returns an error if an explicit configuration file is missing or any
/// found file fails to load
pub fn read_or_default(cli_path: &str) -> Result<Config> {
    let path = PathBuf::from(cli_path);

    if cli_path != DEFAULT_CONFIG_PATH {
        if !path.exists() {
            return Err(anyhow!(
                "Configuration file not found: {}",
                path.display()
            ));
        }
        return load_config(&path);
    }

    if path.exists() {
        return load_config(&path);
    }

    if let Ok(folder) = find_project_folder() {
        let candidate = folder.config_dir().join(DEFAULT_CONFIG_PATH);
        if candidate.exists() {
            return load_config(&candidate);
        }
    }

    info!("No configuration file found, using defaults");
    Ok(Config::default())
}

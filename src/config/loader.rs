//! Configuration file discovery and loading.
//!
//! The launcher reads at most one file. Resolution order:
//! 1. An explicit path (`--config` / `LAUNCHER_CONFIG`), which must exist
//! 2. `.launcher.yml` in the application directory, if present
//! 3. Built-in defaults

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the application directory.
pub const CONFIG_FILE_NAME: &str = ".launcher.yml";

/// Find the config file for an application directory.
pub fn find_config(app_dir: &Path) -> Option<PathBuf> {
    let path = app_dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the launcher configuration.
///
/// # Errors
///
/// Returns `Io` if an explicit config path cannot be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(app_dir: &Path, explicit: Option<&Path>) -> Result<LauncherConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(app_dir) {
            Some(path) => path,
            None => {
                tracing::debug!("No {} in {}", CONFIG_FILE_NAME, app_dir.display());
                return Ok(LauncherConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a `LauncherConfig`.
///
/// An empty file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }

    let config: LauncherConfig =
        serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&config).map_err(|message| LauncherError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })?;
    Ok(config)
}

/// Reject configs that cannot run anything.
///
/// Overriding a tool section replaces it entirely, so a section that sets
/// only `install_hint` leaves `command` empty.
fn validate(config: &LauncherConfig) -> std::result::Result<(), String> {
    if config.runtime.command.trim().is_empty() {
        return Err("runtime.command must not be empty".to_string());
    }
    if config.package_manager.command.trim().is_empty() {
        return Err("package_manager.command must not be empty".to_string());
    }
    if config.dependency_dir.trim().is_empty() {
        return Err("dependency_dir must not be empty".to_string());
    }
    Ok(())
}

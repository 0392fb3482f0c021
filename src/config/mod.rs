//! Launcher configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use launcher::config::{load_config, LauncherConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".launcher.yml"), "app_name: Translator").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name, "Translator");
//! assert_eq!(config.package_manager.command, "npm");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{LauncherConfig, ToolSpec};

//! Launcher - checks a runtime, installs dependencies, starts the app.
//!
//! The launcher verifies that Node.js and npm (or the configured runtime
//! and package manager) are on the search path, runs `npm install` when
//! the `node_modules` directory next to the launcher is missing, and then
//! hands off to `npm start`.
//!
//! # Modules
//!
//! - [`bootstrap`] - The bootstrap sequence and tool presence checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.launcher.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Process execution, PATH lookup, interrupt tracking
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use launcher::bootstrap::Bootstrapper;
//! use launcher::config::LauncherConfig;
//! use launcher::shell::{MockResponse, MockRunner};
//! use launcher::ui::MockUI;
//! use launcher::LauncherError;
//!
//! let app = tempfile::TempDir::new().unwrap();
//! let runner = MockRunner::new();
//! runner.respond("node --version", MockResponse::NotFound);
//!
//! let config = LauncherConfig::default();
//! let err = Bootstrapper::new(&config, app.path(), &runner)
//!     .run(&mut MockUI::new())
//!     .unwrap_err();
//! assert!(matches!(err, LauncherError::ToolMissing { .. }));
//! assert_eq!(err.exit_code(), 1);
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};

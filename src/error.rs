//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type used throughout
//! the bootstrap sequence, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error is terminal: nothing is retried or rolled back
//! - [`LauncherError::exit_code`] maps an error to the process exit status
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The runtime or package manager is not available on the search path.
    #[error("{tool} is not installed!")]
    ToolMissing { tool: String, hint: Option<String> },

    /// The package manager's install command exited non-zero.
    #[error("Error installing dependencies: {command} exited with code {}", display_code(.code))]
    InstallFailed { command: String, code: Option<i32> },

    /// The start command exited non-zero.
    #[error("Error launching application: {command} exited with code {}", display_code(.code))]
    LaunchFailed { command: String, code: Option<i32> },

    /// The user sent an interrupt while a step was running.
    #[error("Program interrupted by user.")]
    UserInterrupted,

    /// A program could not be found on the search path.
    #[error("Executable not found on PATH: {program}")]
    BinaryNotFound { program: String },

    /// Failed to parse the launcher configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// Process exit status for this error.
    ///
    /// An interrupt is a deliberate cancellation and exits cleanly.
    pub fn exit_code(&self) -> u8 {
        match self {
            LauncherError::UserInterrupted => 0,
            _ => 1,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

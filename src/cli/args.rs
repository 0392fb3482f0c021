//! CLI argument definitions.
//!
//! The launcher has no subcommands: running it with no arguments checks
//! the runtime, installs dependencies if needed, and starts the app.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Checks for Node.js and npm, installs dependencies if needed, and starts the app.
#[derive(Debug, Parser)]
#[command(name = "launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Application directory (defaults to the launcher's own directory)
    #[arg(short, long, env = "LAUNCHER_APP_DIR")]
    pub project: Option<PathBuf>,

    /// Path to config file (defaults to <app dir>/.launcher.yml)
    #[arg(short, long, env = "LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

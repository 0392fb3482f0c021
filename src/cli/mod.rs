//! Command-line interface for the launcher.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`execute`] - Wires the parsed arguments to the bootstrap sequence

pub mod args;

pub use args::Cli;

use crate::bootstrap::{report_error, resolve_app_dir, Bootstrapper};
use crate::config::load_config;
use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Run the launcher for parsed arguments.
///
/// Returns the process exit status. Errors are reported through `ui`.
pub fn execute(cli: &Cli, runner: &dyn ProcessRunner, ui: &mut dyn UserInterface) -> u8 {
    match bootstrap(cli, runner, ui) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!("Bootstrap ended: {:?}", e);
            report_error(ui, &e);
            e.exit_code()
        }
    }
}

fn bootstrap(cli: &Cli, runner: &dyn ProcessRunner, ui: &mut dyn UserInterface) -> Result<()> {
    let app_dir = resolve_app_dir(cli.project.as_deref())?;
    let config = load_config(&app_dir, cli.config.as_deref())?;
    Bootstrapper::new(&config, &app_dir, runner).run(ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(dir: &std::path::Path) -> Cli {
        let dir = dir.to_string_lossy().to_string();
        Cli::parse_from(["launcher", "--project", dir.as_str()])
    }

    #[test]
    fn success_exits_zero() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        assert_eq!(execute(&cli_for(temp.path()), &runner, &mut ui), 0);
        assert_eq!(runner.count("npm start"), 1);
    }

    #[test]
    fn missing_runtime_exits_one_and_names_it() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.respond("node --version", MockResponse::NotFound);
        let mut ui = MockUI::new();

        assert_eq!(execute(&cli_for(temp.path()), &runner, &mut ui), 1);
        assert!(ui.has_error("Node.js is not installed!"));
    }

    #[test]
    fn interrupt_exits_zero() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        runner.respond("npm install", MockResponse::Interrupted);
        let mut ui = MockUI::new();

        assert_eq!(execute(&cli_for(temp.path()), &runner, &mut ui), 0);
        assert!(ui.has_message("interrupted"));
    }

    #[test]
    fn reads_config_from_app_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".launcher.yml"),
            "app_name: Translator\nstart_args: [run, electron]\n",
        )
        .unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        assert_eq!(execute(&cli_for(temp.path()), &runner, &mut ui), 0);
        assert_eq!(runner.count("npm run electron"), 1);
        assert!(ui.has_message("Launching Translator..."));
    }

    #[test]
    fn bad_config_exits_one_without_running_anything() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".launcher.yml"), "install_args: {").unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        assert_eq!(execute(&cli_for(temp.path()), &runner, &mut ui), 1);
        assert!(runner.invocations().is_empty());
        assert!(ui.has_error("Failed to parse config"));
    }
}

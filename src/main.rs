//! Launcher CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use launcher::cli::{execute, Cli};
use launcher::shell::{install_handler, SystemRunner};
use launcher::ui::{LauncherTheme, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("launcher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launcher=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Launcher starting with args: {:?}", cli);

    let mut ui = if cli.no_color {
        TerminalUI::with_theme(cli.output_mode(), LauncherTheme::plain())
    } else {
        TerminalUI::new(cli.output_mode())
    };

    if let Err(e) = install_handler() {
        tracing::warn!("Could not install interrupt handler: {}", e);
    }

    let code = execute(&cli, &SystemRunner::new(), &mut ui);
    tracing::debug!("Launcher exiting with status {}", code);
    ExitCode::from(code)
}

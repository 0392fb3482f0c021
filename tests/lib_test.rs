//! Library integration tests.

use launcher::bootstrap::Bootstrapper;
use launcher::config::{load_config, LauncherConfig};
use launcher::shell::{MockResponse, MockRunner};
use launcher::ui::MockUI;
use launcher::LauncherError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = LauncherError::ToolMissing {
        tool: "npm".into(),
        hint: None,
    };
    assert!(err.to_string().contains("npm"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> launcher::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use launcher::cli::Cli;

    let cli = Cli::parse_from(["launcher", "--debug"]);
    assert!(cli.debug);
}

#[test]
fn loaded_config_drives_the_bootstrap() {
    let app = TempDir::new().unwrap();
    fs::write(
        app.path().join(".launcher.yml"),
        "install_args: [ci]\ndependency_dir: deps\n",
    )
    .unwrap();

    let config = load_config(app.path(), None).unwrap();
    let runner = MockRunner::new();
    let mut ui = MockUI::new();
    Bootstrapper::new(&config, app.path(), &runner)
        .run(&mut ui)
        .unwrap();

    assert_eq!(
        runner.invocations(),
        vec!["node --version", "npm --version", "npm ci", "npm start"]
    );
}

#[test]
fn interrupt_after_install_skips_launch() {
    let app = TempDir::new().unwrap();
    let config = LauncherConfig::default();
    let runner = MockRunner::new();
    runner.respond("npm install", MockResponse::Interrupted);

    let err = Bootstrapper::new(&config, app.path(), &runner)
        .run(&mut MockUI::new())
        .unwrap_err();

    assert_eq!(err.exit_code(), 0);
    assert_eq!(runner.count("npm start"), 0);
}

//! The bootstrap sequence.
//!
//! detect runtime -> detect package manager -> check dependency cache
//! -> install if absent -> launch

use std::path::{Path, PathBuf};

use crate::config::{LauncherConfig, ToolSpec};
use crate::error::{LauncherError, Result};
use crate::shell::{Invocation, ProcessRunner};
use crate::ui::UserInterface;

use super::tools::{probe_tool, ToolStatus};

/// Which step a process ran for, to pick the failure variant.
#[derive(Debug, Clone, Copy)]
enum Step {
    Install,
    Launch,
}

/// Runs the bootstrap sequence for one application directory.
pub struct Bootstrapper<'a, R: ProcessRunner + ?Sized> {
    config: &'a LauncherConfig,
    app_dir: PathBuf,
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> Bootstrapper<'a, R> {
    /// Create a bootstrapper for `app_dir`.
    pub fn new(config: &'a LauncherConfig, app_dir: &Path, runner: &'a R) -> Self {
        Self {
            config,
            app_dir: app_dir.to_path_buf(),
            runner,
        }
    }

    /// Probe the runtime.
    pub fn check_runtime(&self) -> Result<ToolStatus> {
        probe_tool(self.runner, &self.config.runtime, &self.app_dir)
    }

    /// Probe the package manager.
    pub fn check_package_manager(&self) -> Result<ToolStatus> {
        probe_tool(self.runner, &self.config.package_manager, &self.app_dir)
    }

    /// Whether the runtime's version command exits successfully.
    pub fn runtime_present(&self) -> Result<bool> {
        Ok(self.check_runtime()?.is_present())
    }

    /// Whether the package manager's version command exits successfully.
    pub fn package_manager_present(&self) -> Result<bool> {
        Ok(self.check_package_manager()?.is_present())
    }

    /// Path of the dependency cache directory.
    pub fn dependency_dir(&self) -> PathBuf {
        self.app_dir.join(&self.config.dependency_dir)
    }

    /// Whether the dependency cache directory exists.
    pub fn dependencies_installed(&self) -> bool {
        self.dependency_dir().is_dir()
    }

    /// Run the package manager's install command.
    pub fn install_dependencies(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Installing dependencies...");
        self.run_step(Step::Install)?;
        ui.success("Dependencies installed successfully!");
        ui.blank_line();
        Ok(())
    }

    /// Run the package manager's start command.
    pub fn launch_application(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message(&format!("Launching {}...", self.config.app_name));
        self.run_step(Step::Launch)
    }

    /// Run the whole sequence.
    ///
    /// Stops at the first failure. The runtime is checked before the
    /// package manager, and nothing is installed or launched unless both
    /// are present.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        tracing::debug!("Bootstrapping {}", self.app_dir.display());
        ui.show_banner(&format!("{} - Launcher", self.config.app_name));

        let runtime = self.check_runtime()?;
        self.require(&self.config.runtime, &runtime, ui)?;

        let package_manager = self.check_package_manager()?;
        self.require(&self.config.package_manager, &package_manager, ui)?;

        self.checkpoint()?;
        if self.dependencies_installed() {
            ui.success("Dependencies found");
            ui.blank_line();
        } else {
            tracing::debug!("{} is missing", self.dependency_dir().display());
            ui.blank_line();
            ui.warning("Dependencies not found. Installing...");
            self.install_dependencies(ui)?;
        }

        self.checkpoint()?;
        self.launch_application(ui)
    }

    fn require(
        &self,
        spec: &ToolSpec,
        status: &ToolStatus,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        match status {
            ToolStatus::Present { version: Some(v) } => {
                ui.success(&format!("{} is installed ({})", spec.name(), v));
                Ok(())
            }
            ToolStatus::Present { version: None } => {
                ui.success(&format!("{} is installed", spec.name()));
                Ok(())
            }
            ToolStatus::Missing => Err(LauncherError::ToolMissing {
                tool: spec.name().to_string(),
                hint: spec.install_hint.clone(),
            }),
        }
    }

    fn run_step(&self, step: Step) -> Result<()> {
        let (args, command): (&[String], String) = match step {
            Step::Install => (&self.config.install_args, self.config.install_command()),
            Step::Launch => (&self.config.start_args, self.config.start_command()),
        };
        let invocation =
            Invocation::new(&self.config.package_manager.command, args).in_dir(&self.app_dir);

        let outcome = self.runner.run(&invocation);
        if self.runner.interrupted() {
            return Err(LauncherError::UserInterrupted);
        }

        let code = match outcome {
            Ok(result) if result.interrupted => return Err(LauncherError::UserInterrupted),
            Ok(result) if result.success => return Ok(()),
            Ok(result) => result.exit_code,
            Err(LauncherError::BinaryNotFound { .. }) | Err(LauncherError::Io(_)) => None,
            Err(e) => return Err(e),
        };

        Err(match step {
            Step::Install => LauncherError::InstallFailed { command, code },
            Step::Launch => LauncherError::LaunchFailed { command, code },
        })
    }

    /// Fail with `UserInterrupted` if an interrupt arrived between steps.
    fn checkpoint(&self) -> Result<()> {
        if self.runner.interrupted() {
            Err(LauncherError::UserInterrupted)
        } else {
            Ok(())
        }
    }
}

/// Print a terminal error the way the user should see it.
pub fn report_error(ui: &mut dyn UserInterface, err: &LauncherError) {
    match err {
        LauncherError::UserInterrupted => {
            ui.blank_line();
            ui.message(&err.to_string());
        }
        LauncherError::ToolMissing { hint, .. } => {
            ui.error(&err.to_string());
            if let Some(hint) = hint {
                ui.hint(hint);
            }
        }
        _ => ui.error(&err.to_string()),
    }
}

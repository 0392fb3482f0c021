//! External process execution.
//!
//! Every process the launcher starts goes through a [`ProcessRunner`].
//! [`SystemRunner`] spawns real processes; tests substitute
//! [`MockRunner`](super::MockRunner) to record invocations.

use crate::error::{LauncherError, Result};
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::interrupt::{killed_by_interrupt, was_interrupted};
use super::path::resolve_program;

/// How often a running child is checked for exit or interrupt.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A process to run: program, arguments, and how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name (looked up on PATH) or path.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Working directory (None = inherit).
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits the terminal).
    pub capture_output: bool,
}

impl Invocation {
    /// Create an invocation that inherits the terminal.
    pub fn new<S: AsRef<str>>(program: &str, args: &[S]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
            cwd: None,
            capture_output: false,
        }
    }

    /// Run in the given working directory.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Capture output instead of inheriting the terminal.
    pub fn captured(mut self) -> Self {
        self.capture_output = true;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running a process.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Whether the process succeeded (exit code 0).
    pub success: bool,

    /// Whether an interrupt arrived while the process ran.
    pub interrupted: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            success: true,
            interrupted: false,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String) -> Self {
        Self {
            exit_code,
            stdout,
            success: false,
            interrupted: false,
        }
    }

    /// Create a result for a process ended by an interrupt.
    pub fn interrupted(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            interrupted: true,
            ..Default::default()
        }
    }
}

/// Runs external processes.
pub trait ProcessRunner {
    /// Run an invocation to completion.
    ///
    /// Returns `BinaryNotFound` if the program is not on the search path.
    /// A program that runs and exits non-zero is `Ok` with `success == false`.
    /// A program still running when an interrupt arrives is stopped and
    /// reported with `interrupted == true`.
    fn run(&self, invocation: &Invocation) -> Result<CommandResult>;

    /// Whether an interrupt has arrived, including between invocations.
    fn interrupted(&self) -> bool;
}

/// Runs real processes with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        let program =
            resolve_program(&invocation.program).ok_or_else(|| LauncherError::BinaryNotFound {
                program: invocation.program.clone(),
            })?;

        tracing::debug!("Running {} ({})", invocation, program.display());
        let start = Instant::now();

        let mut cmd = Command::new(&program);
        cmd.args(&invocation.args);

        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        if invocation.capture_output {
            cmd.stdin(Stdio::null());
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::null());
        } else {
            cmd.stdin(Stdio::inherit());
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        let mut child = cmd.spawn()?;

        // Drain stdout on a thread so a chatty child cannot block on a full pipe
        let stdout_reader: Option<JoinHandle<String>> = child.stdout.take().map(|mut out| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = out.read_to_string(&mut buf);
                buf
            })
        });

        let Some(status) = wait_interruptible(&mut child)? else {
            tracing::debug!(
                "{} stopped by interrupt after {:?}",
                invocation,
                start.elapsed()
            );
            return Ok(CommandResult::interrupted(None));
        };

        let stdout = stdout_reader
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default();

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            invocation,
            status.code(),
            start.elapsed()
        );

        if was_interrupted() || killed_by_interrupt(&status) {
            Ok(CommandResult::interrupted(status.code()))
        } else if status.success() {
            Ok(CommandResult::success(stdout))
        } else {
            Ok(CommandResult::failure(status.code(), stdout))
        }
    }

    fn interrupted(&self) -> bool {
        was_interrupted()
    }
}

/// Wait for a child, stopping it if an interrupt arrives first.
///
/// Returns `None` when the child was killed because of an interrupt.
fn wait_interruptible(child: &mut Child) -> io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if was_interrupted() {
            // The child may exit between try_wait and kill
            if let Err(e) = child.kill() {
                tracing::debug!("Kill after interrupt failed: {}", e);
            }
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_joins_args() {
        let inv = Invocation::new("npm", &["run", "dev"]);
        assert_eq!(inv.to_string(), "npm run dev");
    }

    #[test]
    fn invocation_builders() {
        let inv = Invocation::new("node", &["--version"])
            .in_dir(Path::new("/app"))
            .captured();
        assert_eq!(inv.cwd, Some(PathBuf::from("/app")));
        assert!(inv.capture_output);
    }

    #[test]
    fn missing_program_is_binary_not_found() {
        let inv = Invocation::new("definitely-not-a-real-tool-4f2a", &["--version"]).captured();
        let result = SystemRunner::new().run(&inv);
        assert!(matches!(
            result,
            Err(LauncherError::BinaryNotFound { program }) if program == "definitely-not-a-real-tool-4f2a"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_successful_command() {
        let inv = Invocation::new("sh", &["-c", "echo v20.11.1"]).captured();
        let result = SystemRunner::new().run(&inv).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "v20.11.1");
        assert!(!result.interrupted);
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_larger_than_a_pipe_buffer() {
        let script = "i=0; while [ $i -lt 20000 ]; do echo 0123456789; i=$((i+1)); done";
        let inv = Invocation::new("sh", &["-c", script]).captured();
        let result = SystemRunner::new().run(&inv).unwrap();

        assert!(result.success);
        assert_eq!(result.stdout.lines().count(), 20000);
    }

    #[cfg(unix)]
    #[test]
    fn reports_non_zero_exit() {
        let inv = Invocation::new("sh", &["-c", "exit 7"]).captured();
        let result = SystemRunner::new().run(&inv).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(7));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "").unwrap();

        let inv = Invocation::new("sh", &["-c", "test -f marker"])
            .in_dir(temp.path())
            .captured();
        assert!(SystemRunner::new().run(&inv).unwrap().success);
    }

    #[cfg(unix)]
    #[test]
    fn child_killed_by_sigint_is_interrupted() {
        // An ignored SIGINT is inherited across exec, so the child cannot die from it
        if super::super::interrupt::sigint_ignored() {
            return;
        }
        let inv = Invocation::new("sh", &["-c", "kill -INT $$"]).captured();
        let result = SystemRunner::new().run(&inv).unwrap();

        assert!(result.interrupted);
        assert!(!result.success);
    }

    #[cfg(unix)]
    #[test]
    fn child_killed_by_other_signal_is_a_failure() {
        let inv = Invocation::new("sh", &["-c", "kill -KILL $$"]).captured();
        let result = SystemRunner::new().run(&inv).unwrap();

        assert!(!result.interrupted);
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
    }
}

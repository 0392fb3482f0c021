//! Presence checks for the runtime and package manager.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::ToolSpec;
use crate::error::{LauncherError, Result};
use crate::shell::{Invocation, ProcessRunner};

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?\d+\.\d+(?:\.\d+)?").unwrap());

/// Whether a tool is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// The version command exited successfully.
    Present {
        /// Version parsed from the version command's output, if any.
        version: Option<String>,
    },
    /// Not on the search path, or the version command failed.
    Missing,
}

impl ToolStatus {
    /// Whether the tool is present.
    pub fn is_present(&self) -> bool {
        matches!(self, ToolStatus::Present { .. })
    }
}

/// Extract the first version-looking token from version output.
pub fn extract_version(output: &str) -> Option<String> {
    RE_VERSION.find(output).map(|m| m.as_str().to_string())
}

/// Run a tool's version command and report whether it is present.
///
/// "Not found" and "non-zero exit" are both absence. Only an interrupt
/// is an error, including one that arrived while a failed check ran.
pub fn probe_tool<R: ProcessRunner + ?Sized>(
    runner: &R,
    spec: &ToolSpec,
    cwd: &Path,
) -> Result<ToolStatus> {
    let invocation = Invocation::new(&spec.command, &spec.version_args)
        .in_dir(cwd)
        .captured();

    let outcome = runner.run(&invocation);
    if runner.interrupted() {
        return Err(LauncherError::UserInterrupted);
    }

    match outcome {
        Ok(result) if result.interrupted => Err(LauncherError::UserInterrupted),
        Ok(result) if result.success => {
            let version = extract_version(&result.stdout);
            tracing::debug!("{} present, version {:?}", spec.command, version);
            Ok(ToolStatus::Present { version })
        }
        Ok(result) => {
            tracing::debug!(
                "{} exited with {:?}; treating as missing",
                invocation,
                result.exit_code
            );
            Ok(ToolStatus::Missing)
        }
        Err(e) => {
            tracing::debug!("{} could not run: {}", invocation, e);
            Ok(ToolStatus::Missing)
        }
    }
}

//! Runtime detection, dependency installation and application launch.
//!
//! # Example
//!
//! ```
//! use launcher::bootstrap::Bootstrapper;
//! use launcher::config::LauncherConfig;
//! use launcher::shell::MockRunner;
//! use launcher::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let app = TempDir::new().unwrap();
//! let config = LauncherConfig::default();
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! Bootstrapper::new(&config, app.path(), &runner).run(&mut ui).unwrap();
//! assert_eq!(runner.count("npm install"), 1);
//! ```

pub mod bootstrapper;
pub mod tools;

pub use bootstrapper::{report_error, Bootstrapper};
pub use tools::{extract_version, probe_tool, ToolStatus};

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// Resolve the application directory.
///
/// Defaults to the directory containing the running executable, so the
/// dependency check does not depend on the caller's working directory.
pub fn resolve_app_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LauncherError::Other(anyhow::anyhow!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_app_dir(Some(Path::new("/srv/app"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/app"));
    }

    #[test]
    fn defaults_to_executable_dir() {
        let dir = resolve_app_dir(None).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(dir.as_path()), exe.parent());
    }
}

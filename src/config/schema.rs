//! Configuration schema definitions for the launcher.
//!
//! This module contains the struct definitions that map to the optional
//! `.launcher.yml` file. Every key is optional; missing keys fall back to
//! the Node.js / npm defaults.

use serde::Deserialize;

/// Root configuration structure for `.launcher.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Application name shown in the banner and launch message.
    pub app_name: String,

    /// Language runtime that must be present.
    pub runtime: ToolSpec,

    /// Package manager used to install and start the application.
    pub package_manager: ToolSpec,

    /// Dependency cache directory, relative to the application directory.
    pub dependency_dir: String,

    /// Arguments passed to the package manager to install dependencies.
    pub install_args: Vec<String>,

    /// Arguments passed to the package manager to start the application.
    pub start_args: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: "Application".to_string(),
            runtime: ToolSpec::node(),
            package_manager: ToolSpec::npm(),
            dependency_dir: "node_modules".to_string(),
            install_args: vec!["install".to_string()],
            start_args: vec!["start".to_string()],
        }
    }
}

impl LauncherConfig {
    /// Human-readable install command, e.g. `npm install`.
    pub fn install_command(&self) -> String {
        display_command(&self.package_manager.command, &self.install_args)
    }

    /// Human-readable start command, e.g. `npm start`.
    pub fn start_command(&self) -> String {
        display_command(&self.package_manager.command, &self.start_args)
    }
}

/// An external tool the launcher depends on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolSpec {
    /// Executable name, looked up on PATH.
    pub command: String,

    /// Name used in messages (e.g. "Node.js").
    pub display_name: String,

    /// Arguments that make the tool print its version and exit.
    pub version_args: Vec<String>,

    /// Shown below the "not installed" message.
    pub install_hint: Option<String>,
}

impl Default for ToolSpec {
    fn default() -> Self {
        Self {
            command: String::new(),
            display_name: String::new(),
            version_args: vec!["--version".to_string()],
            install_hint: None,
        }
    }
}

impl ToolSpec {
    /// The Node.js runtime.
    pub fn node() -> Self {
        Self {
            command: "node".to_string(),
            display_name: "Node.js".to_string(),
            install_hint: Some("Please install Node.js from: https://nodejs.org/".to_string()),
            ..Default::default()
        }
    }

    /// The npm package manager.
    pub fn npm() -> Self {
        Self {
            command: "npm".to_string(),
            display_name: "npm".to_string(),
            install_hint: Some("npm should come with Node.js installation".to_string()),
            ..Default::default()
        }
    }

    /// Display name, falling back to the command when none is configured.
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.command
        } else {
            &self.display_name
        }
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_node_and_npm() {
        let config = LauncherConfig::default();
        assert_eq!(config.runtime.command, "node");
        assert_eq!(config.package_manager.command, "npm");
        assert_eq!(config.dependency_dir, "node_modules");
        assert_eq!(config.install_command(), "npm install");
        assert_eq!(config.start_command(), "npm start");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: LauncherConfig = serde_yaml::from_str("app_name: Translator").unwrap();
        assert_eq!(config.app_name, "Translator");
        assert_eq!(config.runtime, ToolSpec::node());
        assert_eq!(config.start_args, vec!["start"]);
    }

    #[test]
    fn tool_spec_partial_override() {
        let yaml = r#"
package_manager:
  command: pnpm
"#;
        let config: LauncherConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.package_manager.command, "pnpm");
        assert_eq!(config.package_manager.version_args, vec!["--version"]);
        assert_eq!(config.package_manager.name(), "pnpm");
        assert_eq!(config.install_command(), "pnpm install");
    }

    #[test]
    fn name_prefers_display_name() {
        assert_eq!(ToolSpec::node().name(), "Node.js");
    }

    #[test]
    fn start_command_with_multiple_args() {
        let config = LauncherConfig {
            start_args: vec!["run".to_string(), "dev".to_string()],
            ..Default::default()
        };
        assert_eq!(config.start_command(), "npm run dev");
    }
}

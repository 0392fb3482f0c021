//! Visual theme and styling.

use console::Style;

/// Width of the banner rule.
const BANNER_WIDTH: usize = 50;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for the banner title (magenta bold).
    pub header: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint, indented under the line above it.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("  {}", self.dim.apply_to(msg))
    }

    /// Format the banner: rule, title, rule.
    pub fn format_banner(&self, title: &str) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        format!(
            "{}\n{}\n{}",
            self.dim.apply_to(&rule),
            self.header.apply_to(title),
            self.dim.apply_to(&rule)
        )
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = LauncherTheme::plain().format_success("Node.js is installed");
        assert_eq!(msg, "✓ Node.js is installed");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = LauncherTheme::plain().format_warning("Dependencies not found");
        assert_eq!(msg, "⚠ Dependencies not found");
    }

    #[test]
    fn theme_formats_error() {
        let msg = LauncherTheme::plain().format_error("npm is not installed!");
        assert_eq!(msg, "✗ npm is not installed!");
    }

    #[test]
    fn hint_is_indented() {
        let msg = LauncherTheme::plain().format_hint("Please install Node.js");
        assert_eq!(msg, "  Please install Node.js");
    }

    #[test]
    fn banner_wraps_title_in_rules() {
        let banner = LauncherTheme::plain().format_banner("Translator - Launcher");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(BANNER_WIDTH));
        assert_eq!(lines[1], "Translator - Launcher");
        assert_eq!(lines[2], lines[0]);
    }
}

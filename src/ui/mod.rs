//! Terminal feedback for the bootstrap sequence.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use launcher::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_banner("Translator - Launcher");
//! ui.success("Node.js is installed");
//! assert!(ui.has_success("Node.js"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display an indented hint below the previous line.
    fn hint(&mut self, msg: &str);

    /// Show the banner printed before any checks.
    fn show_banner(&mut self, title: &str);

    /// Print an empty line.
    fn blank_line(&mut self);
}

//! Mock process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything.
//! It records every invocation and answers from pre-configured responses
//! keyed by the invocation's display form (`"npm install"`). An interrupt
//! can be scheduled to arrive once a given invocation has run.
//!
//! # Example
//!
//! ```
//! use launcher::shell::{Invocation, MockResponse, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond("node --version", MockResponse::Output("v20.11.1".to_string()));
//! runner.respond("npm install", MockResponse::Exit(1));
//!
//! let result = runner.run(&Invocation::new("npm", &["install"])).unwrap();
//! assert!(!result.success);
//! assert_eq!(runner.invocations(), vec!["npm install".to_string()]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{LauncherError, Result};

use super::command::{CommandResult, Invocation, ProcessRunner};

/// A canned response for a mocked invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Exit with the given code and no output.
    Exit(i32),
    /// Exit 0 with the given stdout.
    Output(String),
    /// Program not on the search path.
    NotFound,
    /// Ended by an interrupt.
    Interrupted,
}

/// Process runner that records invocations instead of spawning processes.
///
/// Invocations without a configured response succeed with no output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, MockResponse>>,
    invocations: RefCell<Vec<Invocation>>,
    interrupt_after: RefCell<Option<String>>,
    interrupted: Cell<bool>,
}

impl MockRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for an invocation, e.g. `"npm install"`.
    pub fn respond(&self, command: &str, response: MockResponse) {
        self.responses
            .borrow_mut()
            .insert(command.to_string(), response);
    }

    /// Raise the interrupt flag once `command` has run, whatever its result.
    pub fn interrupt_after(&self, command: &str) {
        *self.interrupt_after.borrow_mut() = Some(command.to_string());
    }

    /// Display form of every invocation, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Full recorded invocations, in order.
    pub fn recorded(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Number of times a command was invoked.
    pub fn count(&self, command: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|inv| inv.as_str() == command)
            .count()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(invocation.clone());

        let command = invocation.to_string();
        if self.interrupt_after.borrow().as_deref() == Some(command.as_str()) {
            self.interrupted.set(true);
        }

        let response = self
            .responses
            .borrow()
            .get(&command)
            .cloned()
            .unwrap_or(MockResponse::Exit(0));

        match response {
            MockResponse::Exit(0) => Ok(CommandResult::success(String::new())),
            MockResponse::Exit(code) => Ok(CommandResult::failure(Some(code), String::new())),
            MockResponse::Output(stdout) => Ok(CommandResult::success(stdout)),
            MockResponse::NotFound => Err(LauncherError::BinaryNotFound {
                program: invocation.program.clone(),
            }),
            MockResponse::Interrupted => {
                self.interrupted.set(true);
                Ok(CommandResult::interrupted(None))
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_invocations_succeed() {
        let runner = MockRunner::new();
        let result = runner.run(&Invocation::new("npm", &["start"])).unwrap();
        assert!(result.success);
    }

    #[test]
    fn records_in_order() {
        let runner = MockRunner::new();
        runner.run(&Invocation::new("node", &["--version"])).unwrap();
        runner.run(&Invocation::new("npm", &["--version"])).unwrap();

        assert_eq!(runner.invocations(), vec!["node --version", "npm --version"]);
        assert_eq!(runner.count("npm --version"), 1);
    }

    #[test]
    fn not_found_is_an_error() {
        let runner = MockRunner::new();
        runner.respond("node --version", MockResponse::NotFound);
        let result = runner.run(&Invocation::new("node", &["--version"]));
        assert!(matches!(result, Err(LauncherError::BinaryNotFound { .. })));
    }

    #[test]
    fn interrupted_response() {
        let runner = MockRunner::new();
        runner.respond("npm start", MockResponse::Interrupted);
        let result = runner.run(&Invocation::new("npm", &["start"])).unwrap();
        assert!(result.interrupted);
        assert!(runner.interrupted());
    }

    #[test]
    fn interrupt_after_raises_flag_once_command_ran() {
        let runner = MockRunner::new();
        runner.interrupt_after("npm --version");
        runner.respond("npm --version", MockResponse::NotFound);

        runner.run(&Invocation::new("node", &["--version"])).unwrap();
        assert!(!runner.interrupted());

        assert!(runner.run(&Invocation::new("npm", &["--version"])).is_err());
        assert!(runner.interrupted());
    }
}

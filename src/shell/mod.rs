//! Process execution, PATH lookup and interrupt tracking.

pub mod command;
pub mod interrupt;
pub mod mock;
pub mod path;

pub use command::{CommandResult, Invocation, ProcessRunner, SystemRunner};
pub use interrupt::{install_handler, was_interrupted};
pub use mock::{MockResponse, MockRunner};
pub use path::{parse_system_path, resolve_program, resolve_tool_path};

// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`process`] runs one command line as a child process and captures its
//!   output.
//! - [`graph`] queries the repository graph for the graph pane.
//! - [`backend`] provides the `CommandBackend` trait the driver uses, with
//!   `RealCommandBackend` for production; tests replace it with a fake.

pub mod backend;
pub mod graph;
pub mod process;

pub use backend::{CommandBackend, RealCommandBackend};
pub use graph::{DEFAULT_GRAPH_COMMAND, GraphQuery};
pub use process::{CapturedOutput, ProcessRunner, split_command_line};

/// What one Action step produced: the command line as typed in the
/// walkthrough and the single text blob to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub command: String,
    pub output: String,
}

impl ExecutionResult {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

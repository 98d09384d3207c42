// src/exec/backend.rs

//! Pluggable command backend abstraction.
//!
//! The driver talks to a `CommandBackend` instead of spawning processes
//! itself. Production uses [`RealCommandBackend`]; tests provide a fake that
//! returns scripted results without touching git.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;

use super::{ExecutionResult, GraphQuery, ProcessRunner};

/// Trait abstracting how walkthrough commands and graph queries are executed.
pub trait CommandBackend: Send {
    /// Run one Action step's command line in `working_dir`.
    fn run_command<'a>(
        &'a mut self,
        command_line: &'a str,
        working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>>;

    /// Fetch the current graph text for `working_dir` (empty on a non-zero exit).
    fn query_graph<'a>(
        &'a mut self,
        working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Real backend: child processes via [`ProcessRunner`] and [`GraphQuery`].
#[derive(Debug, Clone, Default)]
pub struct RealCommandBackend {
    runner: ProcessRunner,
    graph: GraphQuery,
}

impl RealCommandBackend {
    pub fn new(graph: GraphQuery) -> Self {
        Self {
            runner: ProcessRunner::new(),
            graph,
        }
    }
}

impl CommandBackend for RealCommandBackend {
    fn run_command<'a>(
        &'a mut self,
        command_line: &'a str,
        working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>> {
        Box::pin(self.runner.run(command_line, working_dir))
    }

    fn query_graph<'a>(
        &'a mut self,
        working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.graph.query(working_dir))
    }
}

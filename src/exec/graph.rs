// src/exec/graph.rs

use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::exec::ProcessRunner;

/// Command used for the graph pane unless configured otherwise.
pub const DEFAULT_GRAPH_COMMAND: &str = "git log --graph --pretty=short --all";

/// Queries the repository graph shown in the graph pane.
///
/// A non-zero exit (e.g. no commits yet, or not a repository) yields an empty
/// string. Only a failure to launch the executable is an error.
#[derive(Debug, Clone)]
pub struct GraphQuery {
    command: String,
    runner: ProcessRunner,
}

impl GraphQuery {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            runner: ProcessRunner::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub async fn query(&self, repo_path: &Path) -> Result<String> {
        let captured = self.runner.capture(&self.command, repo_path).await?;
        if captured.success {
            Ok(captured.stdout)
        } else {
            debug!(
                exit_code = captured.code.unwrap_or(-1),
                "graph query exited non-zero; showing an empty graph"
            );
            Ok(String::new())
        }
    }
}

impl Default for GraphQuery {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_COMMAND)
    }
}

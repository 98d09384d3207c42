use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gitdemo::errors::Result;
use gitdemo::exec::{CommandBackend, ExecutionResult};

#[derive(Debug, Default)]
struct FakeState {
    outputs: HashMap<String, String>,
    graph_after: HashMap<String, String>,
    graph: String,
    executed: Vec<(String, PathBuf)>,
    graph_queries: usize,
}

/// A fake command backend that:
/// - records which command lines were "run" and where
/// - answers each command with a scripted output (empty by default)
/// - serves a graph text that can change after given commands run.
///
/// Clones share state, so a test can keep one clone and hand the other to the
/// driver.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, command: &str, output: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .outputs
            .insert(command.to_string(), output.to_string());
        self
    }

    pub fn with_graph(self, graph: &str) -> Self {
        self.state.lock().unwrap().graph = graph.to_string();
        self
    }

    /// Once `command` has run, graph queries return `graph`.
    pub fn with_graph_after(self, command: &str, graph: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .graph_after
            .insert(command.to_string(), graph.to_string());
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .executed
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    pub fn working_dirs(&self) -> Vec<PathBuf> {
        self.state
            .lock()
            .unwrap()
            .executed
            .iter()
            .map(|(_, dir)| dir.clone())
            .collect()
    }

    pub fn graph_queries(&self) -> usize {
        self.state.lock().unwrap().graph_queries
    }
}

impl CommandBackend for FakeBackend {
    fn run_command<'a>(
        &'a mut self,
        command_line: &'a str,
        working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>> {
        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let mut guard = state.lock().unwrap();
            guard
                .executed
                .push((command_line.to_string(), working_dir.to_path_buf()));
            if let Some(graph) = guard.graph_after.get(command_line).cloned() {
                guard.graph = graph;
            }
            let output = guard.outputs.get(command_line).cloned().unwrap_or_default();
            Ok(ExecutionResult::new(command_line, output))
        })
    }

    fn query_graph<'a>(
        &'a mut self,
        _working_dir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let state = Arc::clone(&self.state);

        Box::pin(async move {
            let mut guard = state.lock().unwrap();
            guard.graph_queries += 1;
            Ok(guard.graph.clone())
        })
    }
}

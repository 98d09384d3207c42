// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::exec::DEFAULT_GRAPH_COMMAND;

/// Default number of commands kept in the history pane.
pub const DEFAULT_COMMAND_HISTORY: usize = 12;

/// Default repaint interval of the live display while waiting for the user.
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(1);

/// Walkthrough file as read from TOML.
///
/// ```toml
/// title = "Command Overview"
/// welcome = "Welcome!"
///
/// [[step]]
/// text = "We will now create a file."
///
/// [[step.write]]
/// path = "hello.txt"
/// contents = "Hello World!\n"
///
/// [[step]]
/// text = "Let's see what git thinks."
/// command = "git status"
/// ```
///
/// All top-level keys are optional; validation requires at least one step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawScript {
    /// Title of the narration pane.
    #[serde(default)]
    pub title: Option<String>,

    /// Narration of the initial render, before the first step.
    #[serde(default)]
    pub welcome: Option<String>,

    /// `[[step]]` tables, in walkthrough order.
    #[serde(default, rename = "step")]
    pub steps: Vec<StepConfig>,
}

/// `[[step]]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// Narration; `{sandbox}` expands to the sandbox path.
    #[serde(default)]
    pub text: String,

    /// If present, the step runs this command line in the sandbox.
    #[serde(default)]
    pub command: Option<String>,

    /// Files written before this step is shown.
    #[serde(default)]
    pub write: Vec<WriteConfig>,
}

/// `[[step.write]]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteConfig {
    /// Path relative to the sandbox root.
    pub path: String,

    #[serde(default)]
    pub contents: String,

    /// Append instead of truncating.
    #[serde(default)]
    pub append: bool,
}

/// Runtime settings, passed explicitly into the components that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Sandbox directory; reset at startup.
    pub sandbox: PathBuf,

    /// Capacity of the history pane.
    pub command_history: usize,

    /// Command line whose stdout fills the graph pane.
    pub graph_command: String,

    /// Repaint interval while waiting for the user.
    pub refresh: Duration,
}

impl DemoSettings {
    pub fn new(sandbox: impl Into<PathBuf>) -> Self {
        Self {
            sandbox: sandbox.into(),
            command_history: DEFAULT_COMMAND_HISTORY,
            graph_command: DEFAULT_GRAPH_COMMAND.to_string(),
            refresh: DEFAULT_REFRESH,
        }
    }

    pub fn with_command_history(mut self, command_history: usize) -> Self {
        self.command_history = command_history;
        self
    }
}

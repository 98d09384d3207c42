#![allow(dead_code)]

use gitdemo::config::{RawScript, StepConfig, WriteConfig};
use gitdemo::script::DemoScript;

/// Builder for `DemoScript` to simplify test setup.
///
/// Goes through the same `TryFrom<RawScript>` validation as walkthrough files.
pub struct ScriptBuilder {
    raw: RawScript,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawScript::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.raw.title = Some(title.to_string());
        self
    }

    pub fn welcome(mut self, text: &str) -> Self {
        self.raw.welcome = Some(text.to_string());
        self
    }

    pub fn narration(mut self, text: &str) -> Self {
        self.raw.steps.push(StepConfig {
            text: text.to_string(),
            command: None,
            write: vec![],
        });
        self
    }

    pub fn action(mut self, text: &str, command: &str) -> Self {
        self.raw.steps.push(StepConfig {
            text: text.to_string(),
            command: Some(command.to_string()),
            write: vec![],
        });
        self
    }

    /// Action step without narration text.
    pub fn command(self, command: &str) -> Self {
        self.action("", command)
    }

    /// Write a file before the most recently added step.
    pub fn write(self, path: &str, contents: &str) -> Self {
        self.setup(path, contents, false)
    }

    /// Append to a file before the most recently added step.
    pub fn append(self, path: &str, contents: &str) -> Self {
        self.setup(path, contents, true)
    }

    fn setup(mut self, path: &str, contents: &str, append: bool) -> Self {
        let step = self
            .raw
            .steps
            .last_mut()
            .expect("add a step before attaching setup writes to it");
        step.write.push(WriteConfig {
            path: path.to_string(),
            contents: contents.to_string(),
            append,
        });
        self
    }

    pub fn build_raw(self) -> RawScript {
        self.raw
    }

    pub fn build(self) -> DemoScript {
        DemoScript::try_from(self.raw).expect("Failed to build valid script from builder")
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

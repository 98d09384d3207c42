// src/script.rs

//! Walkthrough steps and the lazy sequence that hands them to the driver.
//!
//! A [`DemoScript`] is an ordered list of entries, each a [`Step`] with
//! optional [`FileEffect`]s that prepare the sandbox for it. Iterating
//! [`DemoScript::steps`] applies an entry's effects right before yielding its
//! step, so the sandbox is always set up before the narration that refers to
//! it is rendered.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::sandbox::SandboxDirectory;

/// Placeholder in narration text that expands to the sandbox path.
pub const SANDBOX_PLACEHOLDER: &str = "{sandbox}";

/// One unit of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Display-only text.
    Narration { text: String },
    /// Text shown alongside the result of running `command` in the sandbox.
    Action { text: String, command: String },
}

impl Step {
    pub fn narration(text: impl Into<String>) -> Self {
        Step::Narration { text: text.into() }
    }

    pub fn action(text: impl Into<String>, command: impl Into<String>) -> Self {
        Step::Action {
            text: text.into(),
            command: command.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Step::Narration { text } | Step::Action { text, .. } => text,
        }
    }

    pub fn command(&self) -> Option<&str> {
        match self {
            Step::Narration { .. } => None,
            Step::Action { command, .. } => Some(command),
        }
    }

    fn with_text(&self, text: String) -> Self {
        match self {
            Step::Narration { .. } => Step::Narration { text },
            Step::Action { command, .. } => Step::Action {
                text,
                command: command.clone(),
            },
        }
    }
}

/// A filesystem change made inside the sandbox before a step is shown.
///
/// Paths are relative to the sandbox root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEffect {
    /// Create or truncate the file with `contents`.
    Write { path: PathBuf, contents: String },
    /// Append `contents`, creating the file if needed.
    Append { path: PathBuf, contents: String },
}

impl FileEffect {
    pub fn path(&self) -> &Path {
        match self {
            FileEffect::Write { path, .. } | FileEffect::Append { path, .. } => path,
        }
    }

    pub fn apply(&self, sandbox: &SandboxDirectory) -> Result<()> {
        let target = sandbox.path().join(self.path());
        match self {
            FileEffect::Write { contents, .. } => {
                debug!(path = %target.display(), bytes = contents.len(), "writing sandbox file");
                sandbox.fs().write(&target, contents.as_bytes())?;
            }
            FileEffect::Append { contents, .. } => {
                debug!(path = %target.display(), bytes = contents.len(), "appending to sandbox file");
                sandbox.fs().append(&target, contents.as_bytes())?;
            }
        }
        Ok(())
    }
}

/// A step together with the setup it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub setup: Vec<FileEffect>,
    pub step: Step,
}

/// A validated walkthrough.
///
/// Build one from TOML via [`crate::config::load_and_validate`] or from a
/// [`crate::config::RawScript`] with `DemoScript::try_from`.
#[derive(Debug, Clone)]
pub struct DemoScript {
    title: Option<String>,
    welcome: String,
    entries: Vec<ScriptEntry>,
}

impl DemoScript {
    /// Construct without validation. Prefer `TryFrom<RawScript>`.
    pub fn new_unchecked(
        title: Option<String>,
        welcome: String,
        entries: Vec<ScriptEntry>,
    ) -> Self {
        Self {
            title,
            welcome,
            entries,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Text of the initial render, with placeholders expanded.
    pub fn welcome(&self, sandbox: &Path) -> String {
        expand_placeholders(&self.welcome, sandbox)
    }

    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A fresh, lazy pass over the walkthrough.
    ///
    /// Each call starts again from the first step; a returned iterator is
    /// consumed once. Setup effects are applied to `sandbox` when the
    /// corresponding step is pulled. After a setup error the iterator is
    /// exhausted.
    pub fn steps<'a>(&'a self, sandbox: &'a SandboxDirectory) -> StepIter<'a> {
        StepIter {
            entries: self.entries.iter(),
            sandbox,
            failed: false,
        }
    }
}

/// Iterator returned by [`DemoScript::steps`].
#[derive(Debug)]
pub struct StepIter<'a> {
    entries: std::slice::Iter<'a, ScriptEntry>,
    sandbox: &'a SandboxDirectory,
    failed: bool,
}

impl Iterator for StepIter<'_> {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let entry = self.entries.next()?;

        for effect in &entry.setup {
            if let Err(e) = effect.apply(self.sandbox) {
                self.failed = true;
                return Some(Err(e));
            }
        }

        let text = expand_placeholders(entry.step.text(), self.sandbox.path());
        Some(Ok(entry.step.with_text(text)))
    }
}

/// Replace [`SANDBOX_PLACEHOLDER`] with the sandbox path.
pub fn expand_placeholders(text: &str, sandbox: &Path) -> String {
    text.replace(SANDBOX_PLACEHOLDER, &sandbox.display().to_string())
}

// src/layout.rs

//! Composition of what the live display shows for one step.
//!
//! [`compose`] is a pure function: the same inputs always give the same
//! [`LayoutState`]. The graph text is passed in by the caller, never fetched
//! here.

use crate::history::HistoryEntry;

/// Prompt appended to the narration pane.
pub const CONTINUE_PROMPT: &str = "Press Enter To Continue ->";

/// Prefix shown in front of every executed command line.
pub const COMMAND_PREFIX: &str = ">>> ";

/// Snapshot of everything one render needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub narration_text: String,
    pub history: Vec<HistoryEntry>,
    pub last_output: String,
    pub graph_text: String,
}

impl LayoutState {
    /// Narration pane: the narration followed by the continue prompt.
    pub fn narration_pane(&self) -> String {
        if self.narration_text.is_empty() {
            CONTINUE_PROMPT.to_string()
        } else {
            format!("{}\n\n{}", self.narration_text, CONTINUE_PROMPT)
        }
    }

    /// History pane: one `>>> command` line per entry, oldest first, then the
    /// most recent output after a blank line.
    pub fn history_pane(&self) -> String {
        let commands: Vec<String> = self
            .history
            .iter()
            .map(|entry| format_command(&entry.command))
            .collect();
        format!("{}\n\n{}", commands.join("\n"), self.last_output)
    }

    /// Graph pane: the raw graph text, possibly empty.
    pub fn graph_pane(&self) -> &str {
        &self.graph_text
    }
}

/// Build the layout for one render.
pub fn compose(
    narration_text: &str,
    history: &[HistoryEntry],
    last_output: &str,
    graph_text: &str,
) -> LayoutState {
    LayoutState {
        narration_text: narration_text.to_string(),
        history: history.to_vec(),
        last_output: last_output.to_string(),
        graph_text: graph_text.to_string(),
    }
}

/// Narration shown for an Action step: its text (if any), the command line
/// and the command's output, separated by blank lines.
pub fn action_narration(text: &str, result: &HistoryEntry) -> String {
    let command = format_command(&result.command);
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if !text.is_empty() {
        parts.push(text);
    }
    parts.push(&command);
    parts.push(&result.output);
    parts.join("\n\n")
}

pub fn format_command(command: &str) -> String {
    format!("{COMMAND_PREFIX}{command}")
}

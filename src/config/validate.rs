// src/config/validate.rs

use std::path::{Component, Path, PathBuf};

use crate::config::model::{DemoSettings, RawScript, StepConfig, WriteConfig};
use crate::errors::{DemoError, Result};
use crate::exec::split_command_line;
use crate::script::{DemoScript, FileEffect, ScriptEntry, Step};

/// Welcome text used when a walkthrough file does not set one.
pub const DEFAULT_WELCOME: &str = "Welcome to the walkthrough.";

impl TryFrom<RawScript> for DemoScript {
    type Error = DemoError;

    fn try_from(raw: RawScript) -> std::result::Result<Self, Self::Error> {
        if raw.steps.is_empty() {
            return Err(DemoError::ConfigError(
                "walkthrough must contain at least one [[step]] table".to_string(),
            ));
        }

        let entries = raw
            .steps
            .iter()
            .enumerate()
            .map(|(idx, step)| build_entry(idx + 1, step))
            .collect::<Result<Vec<_>>>()?;

        let welcome = raw.welcome.unwrap_or_else(|| DEFAULT_WELCOME.to_string());
        Ok(DemoScript::new_unchecked(raw.title, welcome, entries))
    }
}

fn build_entry(number: usize, cfg: &StepConfig) -> Result<ScriptEntry> {
    let step = match &cfg.command {
        Some(command) => {
            split_command_line(command).map_err(|e| {
                DemoError::ConfigError(format!("step {number}: invalid command: {e}"))
            })?;
            Step::action(cfg.text.clone(), command.clone())
        }
        None => {
            if cfg.text.trim().is_empty() {
                return Err(DemoError::ConfigError(format!(
                    "step {number}: a step without `command` must have non-empty `text`"
                )));
            }
            Step::narration(cfg.text.clone())
        }
    };

    let setup = cfg
        .write
        .iter()
        .map(|w| build_effect(number, w))
        .collect::<Result<Vec<_>>>()?;

    Ok(ScriptEntry { setup, step })
}

fn build_effect(number: usize, cfg: &WriteConfig) -> Result<FileEffect> {
    let path = sandbox_relative_path(&cfg.path).map_err(|reason| {
        DemoError::ConfigError(format!(
            "step {number}: write path '{}' {reason}",
            cfg.path
        ))
    })?;
    let contents = cfg.contents.clone();
    Ok(if cfg.append {
        FileEffect::Append { path, contents }
    } else {
        FileEffect::Write { path, contents }
    })
}

/// Accept only plain relative paths so setup writes stay inside the sandbox.
fn sandbox_relative_path(raw: &str) -> std::result::Result<PathBuf, &'static str> {
    let path = Path::new(raw);
    if raw.trim().is_empty() {
        return Err("is empty");
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err("must not contain '..'"),
            Component::RootDir | Component::Prefix(_) => return Err("must be relative"),
        }
    }
    Ok(path.to_path_buf())
}

/// Sanity checks on runtime settings.
pub fn validate_settings(settings: &DemoSettings) -> Result<()> {
    if settings.command_history == 0 {
        return Err(DemoError::ConfigError(
            "command history must be >= 1 (got 0)".to_string(),
        ));
    }
    split_command_line(&settings.graph_command)
        .map_err(|e| DemoError::ConfigError(format!("invalid graph command: {e}")))?;
    Ok(())
}

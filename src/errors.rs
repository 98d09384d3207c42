// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only conditions the demo cannot continue from are errors. A command that
//! exits non-zero is a normal [`ExecutionResult`](crate::exec::ExecutionResult),
//! and a failed graph query is an empty string.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    /// The sandbox could not be removed or recreated.
    #[error("cannot reset sandbox directory {path:?}: {reason}")]
    SandboxReset { path: PathBuf, reason: String },

    /// The executable of a command could not be started at all.
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command line: {0}")]
    CommandParse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

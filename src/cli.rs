// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `gitdemo`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gitdemo",
    version,
    about = "Interactive terminal walkthrough of git, run inside a throwaway folder.",
    long_about = None
)]
pub struct CliArgs {
    /// Walkthrough file (TOML).
    ///
    /// Default: the built-in "git in 30" walkthrough.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Sandbox directory the walkthrough runs in.
    ///
    /// It is deleted and recreated empty at startup. Default: `../git_demo`
    /// relative to the directory of the `gitdemo` executable.
    #[arg(long, value_name = "DIR")]
    pub sandbox: Option<PathBuf>,

    /// How many past commands the history pane keeps.
    #[arg(long, value_name = "N", default_value_t = crate::config::DEFAULT_COMMAND_HISTORY)]
    pub history: usize,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GITDEMO_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Parse + validate the walkthrough and print its steps, without touching
    /// the sandbox or the terminal.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

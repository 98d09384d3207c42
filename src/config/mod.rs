// src/config/mod.rs

//! Configuration for gitdemo.
//!
//! Responsibilities:
//! - Define the TOML-backed walkthrough model and runtime settings (`model.rs`).
//! - Load a walkthrough from disk or the built-in copy (`loader.rs`).
//! - Validate walkthroughs and settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{BUILTIN_SCRIPT, builtin_script, load_and_validate, load_from_path, parse_raw};
pub use model::{
    DEFAULT_COMMAND_HISTORY, DEFAULT_REFRESH, DemoSettings, RawScript, StepConfig, WriteConfig,
};
pub use validate::{DEFAULT_WELCOME, validate_settings};

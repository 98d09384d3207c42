// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::RawScript;
use crate::errors::Result;
use crate::script::DemoScript;

/// The walkthrough shipped with the binary.
pub const BUILTIN_SCRIPT: &str = include_str!("../../walkthroughs/git-basics.toml");

/// Load a walkthrough file from a given path and return the raw `RawScript`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScript> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read walkthrough file");
    parse_raw(&contents)
}

/// Deserialize walkthrough TOML without validating it.
pub fn parse_raw(contents: &str) -> Result<RawScript> {
    let raw: RawScript = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a walkthrough file from path and validate it.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DemoScript> {
    let raw = load_from_path(&path)?;
    DemoScript::try_from(raw)
}

/// Parse and validate the built-in walkthrough.
pub fn builtin_script() -> Result<DemoScript> {
    DemoScript::try_from(parse_raw(BUILTIN_SCRIPT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_walkthrough_is_valid() {
        let script = builtin_script().expect("built-in walkthrough must validate");
        assert!(!script.is_empty());
        assert!(
            script
                .entries()
                .iter()
                .any(|e| e.step.command() == Some("git init"))
        );
    }
}

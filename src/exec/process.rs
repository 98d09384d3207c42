// src/exec/process.rs

//! One-shot external process runner.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{DemoError, Result};
use crate::exec::ExecutionResult;

/// Raw result of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// The one blob shown to the user: stdout on success, stderr otherwise.
    pub fn into_display_output(self) -> String {
        if self.success { self.stdout } else { self.stderr }
    }
}

/// Split a command line into argv using POSIX shell-word rules, so quoted
/// arguments keep their embedded spaces.
pub fn split_command_line(command_line: &str) -> Result<Vec<String>> {
    let argv = shlex::split(command_line).ok_or_else(|| {
        DemoError::CommandParse(format!("unbalanced quotes or escape in '{command_line}'"))
    })?;
    if argv.is_empty() {
        return Err(DemoError::CommandParse("empty command line".to_string()));
    }
    Ok(argv)
}

/// Runs a command line as a child process and waits for it to exit.
///
/// No shell is involved: the first word is the executable, the rest are its
/// arguments. A non-zero exit is a normal outcome; only a failure to start
/// the process is an error ([`DemoError::Launch`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    pub async fn capture(&self, command_line: &str, working_dir: &Path) -> Result<CapturedOutput> {
        let argv = split_command_line(command_line)?;
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| DemoError::CommandParse("empty command line".to_string()))?;

        debug!(
            program = %program,
            ?args,
            cwd = %working_dir.display(),
            "launching process"
        );

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| DemoError::Launch {
                command: command_line.to_string(),
                source,
            })?;

        let captured = CapturedOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        info!(
            command = %command_line,
            exit_code = captured.code.unwrap_or(-1),
            success = captured.success,
            "process exited"
        );

        Ok(captured)
    }

    /// Run `command_line` in `working_dir` and keep the text to display.
    pub async fn run(&self, command_line: &str, working_dir: &Path) -> Result<ExecutionResult> {
        let captured = self.capture(command_line, working_dir).await?;
        Ok(ExecutionResult::new(
            command_line,
            captured.into_display_output(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_quoted_message_as_one_word() {
        let argv = split_command_line("git commit -m 'Added the file hello.txt'").unwrap();
        assert_eq!(argv, vec!["git", "commit", "-m", "Added the file hello.txt"]);
    }

    #[test]
    fn split_rejects_unbalanced_quotes_and_blank_lines() {
        assert!(matches!(
            split_command_line("git commit -m 'oops"),
            Err(DemoError::CommandParse(_))
        ));
        assert!(matches!(
            split_command_line("   "),
            Err(DemoError::CommandParse(_))
        ));
    }

    #[test]
    fn display_output_picks_one_stream() {
        let ok = CapturedOutput {
            success: true,
            code: Some(0),
            stdout: "out".into(),
            stderr: "err".into(),
        };
        let failed = CapturedOutput {
            success: false,
            code: Some(1),
            ..ok.clone()
        };
        assert_eq!(ok.into_display_output(), "out");
        assert_eq!(failed.into_display_output(), "err");
    }
}

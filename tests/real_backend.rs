// tests/real_backend.rs

#![cfg(unix)]

mod common;
use crate::common::{init_tracing, temp_sandbox};

use std::error::Error;

use gitdemo::engine::{DemoDriver, DriverOutcome};
use gitdemo::errors::DemoError;
use gitdemo::exec::{ExecutionResult, GraphQuery, RealCommandBackend};
use gitdemo::history::HistoryBuffer;
use gitdemo::sandbox::SandboxDirectory;
use gitdemo_test_utils::{FakeDisplay, ScriptBuilder, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn real_processes_see_setup_writes_and_failures_are_displayed() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let script = ScriptBuilder::new()
        .narration("Creating a file.")
        .write("hello.txt", "Hello World!\n")
        .action("Show it.", "cat hello.txt")
        .action("This one fails.", "sh -c 'echo nothing to commit >&2; exit 1'")
        .build();

    // `ls` stands in for the repository graph: it reflects sandbox contents.
    let backend = RealCommandBackend::new(GraphQuery::new("ls"));
    let mut driver = DemoDriver::new(
        script,
        SandboxDirectory::new(&path),
        HistoryBuffer::new(12),
        backend,
        FakeDisplay::new(),
    );
    let outcome = with_timeout(driver.run()).await?;

    assert_eq!(outcome, DriverOutcome::Finished { steps: 3 });
    assert_eq!(
        driver.history().snapshot(),
        vec![
            ExecutionResult::new("cat hello.txt", "Hello World!\n"),
            ExecutionResult::new(
                "sh -c 'echo nothing to commit >&2; exit 1'",
                "nothing to commit\n"
            ),
        ]
    );

    let graphs: Vec<&str> = driver
        .display()
        .rendered()
        .iter()
        .map(|l| l.graph_text.as_str())
        .collect();
    assert_eq!(graphs[0], "", "sandbox is empty at the first render");
    assert_eq!(graphs[1], "hello.txt\n");
    Ok(())
}

#[tokio::test]
async fn missing_version_control_executable_is_fatal() {
    let (_tmp, path) = temp_sandbox();
    let backend = RealCommandBackend::new(GraphQuery::new("no-such-vcs-binary-4711 log"));
    let mut driver = DemoDriver::new(
        ScriptBuilder::new().narration("never shown").build(),
        SandboxDirectory::new(&path),
        HistoryBuffer::new(12),
        backend,
        FakeDisplay::new(),
    );

    let err = with_timeout(driver.run()).await.unwrap_err();
    assert!(matches!(err, DemoError::Launch { .. }), "got {err:?}");
    assert!(driver.display().rendered().is_empty());
}

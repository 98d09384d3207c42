// tests/driver_scenarios.rs

mod common;
use crate::common::{init_tracing, temp_sandbox};

use std::error::Error;
use std::fs;
use std::sync::Arc;

use gitdemo::engine::{DemoDriver, DriverOutcome, DriverState};
use gitdemo::errors::DemoError;
use gitdemo::exec::ExecutionResult;
use gitdemo::fs::mock::MockFileSystem;
use gitdemo::history::HistoryBuffer;
use gitdemo::sandbox::SandboxDirectory;
use gitdemo::script::DemoScript;
use gitdemo_test_utils::{FakeBackend, FakeDisplay, ScriptBuilder, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn driver(
    script: DemoScript,
    sandbox: SandboxDirectory,
    capacity: usize,
    backend: FakeBackend,
    display: FakeDisplay,
) -> DemoDriver<FakeBackend, FakeDisplay> {
    DemoDriver::new(script, sandbox, HistoryBuffer::new(capacity), backend, display)
}

#[tokio::test]
async fn scenario_a_initial_render_has_empty_history_and_graph() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let backend = FakeBackend::new().with_graph("");
    let script = ScriptBuilder::new()
        .welcome("Welcome to {sandbox}")
        .narration("only step")
        .build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        backend,
        FakeDisplay::interrupt_on_ack(1),
    );
    let outcome = with_timeout(d.run()).await?;

    assert_eq!(outcome, DriverOutcome::Interrupted { steps: 0 });
    let rendered = d.display().rendered();
    assert_eq!(rendered.len(), 1);
    let initial = &rendered[0];
    assert_eq!(initial.narration_text, format!("Welcome to {}", path.display()));
    assert!(initial.history.is_empty());
    assert_eq!(initial.last_output, "");
    assert_eq!(initial.graph_text, "");
    assert!(path.is_dir(), "sandbox must exist before the first render");
    Ok(())
}

#[tokio::test]
async fn scenario_b_single_action_lands_in_history_pane() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let backend = FakeBackend::new().with_output("status-check", "clean");
    let script = ScriptBuilder::new().command("status-check").build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        backend.clone(),
        FakeDisplay::new(),
    );
    let outcome = with_timeout(d.run()).await?;

    assert_eq!(outcome, DriverOutcome::Finished { steps: 1 });
    assert_eq!(d.state(), DriverState::Finished);
    assert_eq!(
        d.history().snapshot(),
        vec![ExecutionResult::new("status-check", "clean")]
    );
    assert_eq!(backend.executed(), vec!["status-check"]);
    assert_eq!(backend.working_dirs(), vec![path.clone()]);

    let last = d.display().last_rendered().expect("rendered");
    let pane = last.history_pane();
    let cmd_at = pane.find(">>> status-check").expect("command listed");
    let out_at = pane.rfind("clean").expect("output listed");
    assert!(cmd_at < out_at, "command must precede output in {pane:?}");
    assert_eq!(last.narration_text, ">>> status-check\n\nclean");
    Ok(())
}

#[tokio::test]
async fn scenario_c_thirteen_actions_keep_last_twelve() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let mut builder = ScriptBuilder::new();
    let mut backend = FakeBackend::new();
    for i in 1..=13 {
        let cmd = format!("step-{i}");
        builder = builder.command(&cmd);
        backend = backend.with_output(&cmd, &format!("out-{i}"));
    }

    let mut d = driver(
        builder.build(),
        SandboxDirectory::new(&path),
        12,
        backend,
        FakeDisplay::new(),
    );
    with_timeout(d.run()).await?;

    let snapshot = d.history().snapshot();
    let commands: Vec<&str> = snapshot.iter().map(|e| e.command.as_str()).collect();
    let expected: Vec<String> = (2..=13).map(|i| format!("step-{i}")).collect();
    assert_eq!(commands, expected);

    let last = d.display().last_rendered().expect("rendered");
    assert_eq!(last.history.len(), 12);
    assert!(!last.history_pane().contains(">>> step-1\n"));
    assert_eq!(last.last_output, "out-13");
    Ok(())
}

#[tokio::test]
async fn scenario_d_interrupt_after_step_three_stops_before_step_four() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let mut builder = ScriptBuilder::new();
    for i in 1..=10 {
        builder = builder.action(&format!("Step {i}"), &format!("cmd-{i}"));
        if i == 4 {
            builder = builder.write("step4.txt", "should never exist");
        }
    }
    let backend = FakeBackend::new();

    // Ack 1 follows the welcome screen, acks 2-4 follow steps 1-3.
    let mut d = driver(
        builder.build(),
        SandboxDirectory::new(&path),
        12,
        backend.clone(),
        FakeDisplay::interrupt_on_ack(4),
    );
    let outcome = with_timeout(d.run()).await?;

    assert_eq!(outcome, DriverOutcome::Interrupted { steps: 3 });
    assert!(outcome.was_interrupted());
    assert_eq!(d.state(), DriverState::Interrupted);
    assert_eq!(backend.executed(), vec!["cmd-1", "cmd-2", "cmd-3"]);
    assert!(!path.join("step4.txt").exists());
    assert_eq!(d.display().rendered().len(), 4);
    assert_eq!(d.display().acks_requested(), 4);
    assert_eq!(d.history().len(), 3);
    Ok(())
}

#[tokio::test]
async fn graph_is_queried_fresh_for_every_render() -> TestResult {
    init_tracing();
    let (_tmp, path) = temp_sandbox();
    let backend = FakeBackend::new()
        .with_graph("")
        .with_graph_after("git commit -m 'first'", "* abc123 first");
    let script = ScriptBuilder::new()
        .narration("before")
        .command("git commit -m 'first'")
        .narration("after")
        .build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        backend.clone(),
        FakeDisplay::new(),
    );
    with_timeout(d.run()).await?;

    let graphs: Vec<&str> = d
        .display()
        .rendered()
        .iter()
        .map(|l| l.graph_text.as_str())
        .collect();
    assert_eq!(graphs, vec!["", "", "* abc123 first", "* abc123 first"]);
    assert_eq!(backend.graph_queries(), 4);
    Ok(())
}

#[tokio::test]
async fn last_output_survives_narration_steps() -> TestResult {
    let (_tmp, path) = temp_sandbox();
    let backend = FakeBackend::new().with_output("git status", "nothing to commit");
    let script = ScriptBuilder::new()
        .action("Check status.", "git status")
        .narration("Explaining what we saw.")
        .build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        backend,
        FakeDisplay::new(),
    );
    with_timeout(d.run()).await?;

    let rendered = d.display().rendered();
    assert_eq!(
        rendered[1].narration_text,
        "Check status.\n\n>>> git status\n\nnothing to commit"
    );
    assert_eq!(rendered[2].narration_text, "Explaining what we saw.");
    assert_eq!(rendered[2].last_output, "nothing to commit");
    Ok(())
}

#[tokio::test]
async fn setup_writes_happen_before_the_step_is_rendered() -> TestResult {
    let (_tmp, path) = temp_sandbox();
    let script = ScriptBuilder::new()
        .narration("The file is now created.")
        .write("hello.txt", "Hello World!\n")
        .build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        FakeBackend::new(),
        FakeDisplay::new(),
    );
    let outcome = with_timeout(d.run()).await?;

    assert_eq!(outcome.steps(), 1);
    assert_eq!(fs::read_to_string(path.join("hello.txt"))?, "Hello World!\n");
    Ok(())
}

#[tokio::test]
async fn leftovers_from_a_crashed_run_are_removed() -> TestResult {
    let (_tmp, path) = temp_sandbox();
    fs::create_dir_all(path.join(".git"))?;
    fs::write(path.join("stale.txt"), "old")?;

    let script = ScriptBuilder::new().narration("fresh").build();
    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        FakeBackend::new(),
        FakeDisplay::new(),
    );
    with_timeout(d.run()).await?;

    assert!(!path.join("stale.txt").exists());
    assert!(!path.join(".git").exists());
    Ok(())
}

#[tokio::test]
async fn finished_run_waits_once_per_render() -> TestResult {
    let (_tmp, path) = temp_sandbox();
    let script = ScriptBuilder::new()
        .narration("one")
        .narration("two")
        .narration("three")
        .build();

    let mut d = driver(
        script,
        SandboxDirectory::new(&path),
        12,
        FakeBackend::new(),
        FakeDisplay::new(),
    );
    let outcome = with_timeout(d.run()).await?;

    assert_eq!(outcome, DriverOutcome::Finished { steps: 3 });
    assert_eq!(d.display().rendered().len(), 4);
    assert_eq!(d.display().acks_requested(), 4);
    Ok(())
}

#[tokio::test]
async fn locked_sandbox_aborts_before_anything_is_rendered() {
    let mock = MockFileSystem::new();
    mock.add_file("/locked/sandbox/file.txt", "x");
    mock.deny("/locked/sandbox");
    let backend = FakeBackend::new();

    let mut d = driver(
        ScriptBuilder::new().command("git init").build(),
        SandboxDirectory::with_fs("/locked/sandbox", Arc::new(mock)),
        12,
        backend.clone(),
        FakeDisplay::new(),
    );
    let err = with_timeout(d.run()).await.unwrap_err();

    assert!(matches!(err, DemoError::SandboxReset { .. }), "got {err:?}");
    assert!(d.display().rendered().is_empty());
    assert!(backend.executed().is_empty());
    assert_eq!(d.state(), DriverState::NotStarted);
}

#[tokio::test]
async fn driver_runs_only_once() -> TestResult {
    let (_tmp, path) = temp_sandbox();
    let mut d = driver(
        ScriptBuilder::new().narration("x").build(),
        SandboxDirectory::new(&path),
        12,
        FakeBackend::new(),
        FakeDisplay::new(),
    );
    with_timeout(d.run()).await?;
    assert!(with_timeout(d.run()).await.is_err());
    Ok(())
}

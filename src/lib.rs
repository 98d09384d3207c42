// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod history;
pub mod layout;
pub mod logging;
pub mod sandbox;
pub mod script;
pub mod tui;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{DemoSettings, builtin_script, load_and_validate, validate_settings};
use crate::engine::{DemoDriver, DriverOutcome};
use crate::errors::Result;
use crate::exec::{GraphQuery, RealCommandBackend};
use crate::history::HistoryBuffer;
use crate::sandbox::{SandboxDirectory, default_sandbox_path};
use crate::script::{DemoScript, Step};
use crate::tui::{PaneTitles, TerminalDisplay};

/// Message printed after the user stops the walkthrough early.
pub const INTERRUPTED_MESSAGE: &str = "Stopped by the user";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - walkthrough loading (built-in or `--script`)
/// - settings (sandbox path, history capacity)
/// - the terminal display and the real command backend
/// - the driver loop
pub async fn run(args: CliArgs) -> Result<()> {
    let script = match &args.script {
        Some(path) => load_and_validate(path)?,
        None => builtin_script()?,
    };

    if args.dry_run {
        print_dry_run(&script);
        return Ok(());
    }

    let sandbox_path = match args.sandbox {
        Some(path) => path,
        None => default_sandbox_path()?,
    };
    let settings = DemoSettings::new(sandbox_path).with_command_history(args.history);
    validate_settings(&settings)?;
    info!(?settings, "starting walkthrough");

    let mut titles = PaneTitles::default();
    if let Some(title) = script.title() {
        titles.narration = title.to_string();
    }

    let display = TerminalDisplay::enter(titles, settings.refresh)?;
    let backend = RealCommandBackend::new(GraphQuery::new(settings.graph_command.clone()));

    let mut driver = DemoDriver::new(
        script,
        SandboxDirectory::new(settings.sandbox.clone()),
        HistoryBuffer::new(settings.command_history),
        backend,
        display,
    );
    let outcome = driver.run().await;

    // Leave the alternate screen before printing anything.
    drop(driver);

    if let DriverOutcome::Interrupted { steps } = outcome? {
        debug!(steps, "stopped early");
        println!("{INTERRUPTED_MESSAGE}");
    }
    Ok(())
}

/// Simple dry-run output: print every step and its setup.
fn print_dry_run(script: &DemoScript) {
    println!("gitdemo dry-run");
    if let Some(title) = script.title() {
        println!("  title = {title}");
    }
    println!();

    println!("steps ({}):", script.len());
    for (idx, entry) in script.entries().iter().enumerate() {
        match &entry.step {
            Step::Narration { text } => {
                println!("  {:>3}. narration: {}", idx + 1, first_line(text));
            }
            Step::Action { text, command } => {
                println!("  {:>3}. action: {command}", idx + 1);
                if !text.is_empty() {
                    println!("       text: {}", first_line(text));
                }
            }
        }
        for effect in &entry.setup {
            println!("       setup: {:?}", effect);
        }
    }

    debug!("dry-run complete (no execution)");
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

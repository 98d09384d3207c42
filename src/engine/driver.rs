// src/engine/driver.rs

use std::fmt;

use tracing::{debug, info};

use crate::errors::{DemoError, Result};
use crate::exec::CommandBackend;
use crate::history::HistoryBuffer;
use crate::layout::{action_narration, compose};
use crate::sandbox::SandboxDirectory;
use crate::script::{DemoScript, Step};
use crate::tui::{Ack, Display};

use super::{DriverOutcome, DriverState};

/// The interactive loop.
///
/// One [`run`](Self::run) per driver:
/// 1. reset the sandbox, render the welcome layout, wait for the user;
/// 2. per step: apply its setup, run its command (Action steps), append the
///    result to the history, query the graph, render, wait for the user;
/// 3. stop when the walkthrough is exhausted or the user interrupts.
///
/// Every state change feeding a render is applied before that render, and
/// nothing happens between a render and the following acknowledgment.
pub struct DemoDriver<B: CommandBackend, D: Display> {
    script: DemoScript,
    sandbox: SandboxDirectory,
    history: HistoryBuffer,
    backend: B,
    display: D,
    state: DriverState,
}

impl<B: CommandBackend, D: Display> fmt::Debug for DemoDriver<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoDriver")
            .field("sandbox", &self.sandbox.path())
            .field("steps", &self.script.len())
            .field("history_len", &self.history.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<B: CommandBackend, D: Display> DemoDriver<B, D> {
    pub fn new(
        script: DemoScript,
        sandbox: SandboxDirectory,
        history: HistoryBuffer,
        backend: B,
        display: D,
    ) -> Self {
        Self {
            script,
            sandbox,
            history,
            backend,
            display,
            state: DriverState::NotStarted,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run the walkthrough to completion or interruption.
    ///
    /// Errors (sandbox reset, launch failures, setup writes, terminal IO)
    /// abort the run; a command exiting non-zero does not.
    pub async fn run(&mut self) -> Result<DriverOutcome> {
        if self.state != DriverState::NotStarted {
            return Err(DemoError::Other(anyhow::anyhow!(
                "driver already started (state: {:?})",
                self.state
            )));
        }

        self.sandbox.reset()?;
        self.state = DriverState::Running;
        let sandbox_path = self.sandbox.path().to_path_buf();
        info!(
            sandbox = %sandbox_path.display(),
            steps = self.script.len(),
            history_capacity = self.history.capacity(),
            "walkthrough started"
        );

        let graph = self.backend.query_graph(&sandbox_path).await?;
        let welcome = self.script.welcome(&sandbox_path);
        let initial = compose(&welcome, &self.history.snapshot(), "", &graph);
        self.display.render(&initial)?;

        if self.display.await_ack().await? == Ack::Interrupt {
            self.state = DriverState::Interrupted;
            info!(steps = 0, "walkthrough interrupted by user");
            return Ok(DriverOutcome::Interrupted { steps: 0 });
        }

        let mut last_output = String::new();
        let mut completed = 0usize;
        for step in self.script.steps(&self.sandbox) {
            let step = step?;
            completed += 1;
            debug!(step = completed, ?step, "pulled step");

            let narration = match &step {
                Step::Narration { text } => text.clone(),
                Step::Action { text, command } => {
                    let result = self.backend.run_command(command, &sandbox_path).await?;
                    let narration = action_narration(text, &result);
                    last_output = result.output.clone();
                    self.history.append(result);
                    narration
                }
            };

            let graph = self.backend.query_graph(&sandbox_path).await?;
            let layout = compose(&narration, &self.history.snapshot(), &last_output, &graph);
            self.display.render(&layout)?;

            if self.display.await_ack().await? == Ack::Interrupt {
                self.state = DriverState::Interrupted;
                info!(steps = completed, "walkthrough interrupted by user");
                return Ok(DriverOutcome::Interrupted { steps: completed });
            }
        }

        self.state = DriverState::Finished;
        info!(steps = completed, "walkthrough finished");
        Ok(DriverOutcome::Finished { steps: completed })
    }
}

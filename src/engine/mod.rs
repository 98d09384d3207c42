// src/engine/mod.rs

//! Orchestration engine for gitdemo.
//!
//! The [`driver`] pulls steps from the walkthrough one at a time, runs their
//! commands through a `CommandBackend`, folds results into the history,
//! renders the composed layout and then waits for the user.

/// Lifecycle of a [`DemoDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    NotStarted,
    Running,
    /// Every step was shown and acknowledged.
    Finished,
    /// The user interrupted while the driver was waiting.
    Interrupted,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOutcome {
    Finished {
        /// Steps pulled and rendered.
        steps: usize,
    },
    Interrupted {
        /// Steps pulled and rendered before the interrupt; 0 means the user
        /// stopped at the welcome screen.
        steps: usize,
    },
}

impl DriverOutcome {
    pub fn steps(&self) -> usize {
        match self {
            DriverOutcome::Finished { steps } | DriverOutcome::Interrupted { steps } => *steps,
        }
    }

    pub fn was_interrupted(&self) -> bool {
        matches!(self, DriverOutcome::Interrupted { .. })
    }
}

pub mod driver;

pub use driver::DemoDriver;

// src/tui/mod.rs

//! Terminal boundary: drawing layouts and waiting for the user.
//!
//! The driver only sees the [`Display`] trait. [`TerminalDisplay`] is the real
//! ratatui/crossterm implementation; tests use a recording fake.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::layout::LayoutState;

pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDisplay, ack_for_key};
pub use ui::{PaneTitles, draw};

/// The user's answer while the driver is suspended between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Pull the next step.
    Continue,
    /// Stop the walkthrough now.
    Interrupt,
}

/// Live display used by the driver.
pub trait Display {
    /// Show `layout`. Called only after every state change feeding it has
    /// been applied.
    fn render(&mut self, layout: &LayoutState) -> Result<()>;

    /// Block until the user continues or interrupts.
    ///
    /// This is the only place the driver suspends, and the only place an
    /// interrupt is observed. Implementations may repaint the last rendered
    /// layout while waiting.
    fn await_ack(&mut self) -> Pin<Box<dyn Future<Output = Result<Ack>> + '_>>;
}

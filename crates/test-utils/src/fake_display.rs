use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use gitdemo::errors::Result;
use gitdemo::layout::LayoutState;
use gitdemo::tui::{Ack, Display};

/// A fake display that records every rendered layout and answers
/// acknowledgments from a script (`Continue` once the script runs out).
#[derive(Debug, Default)]
pub struct FakeDisplay {
    rendered: Vec<LayoutState>,
    acks: VecDeque<Ack>,
    acks_requested: usize,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue `n - 1` times, then interrupt on the `n`-th wait.
    ///
    /// The first wait is the one after the welcome screen.
    pub fn interrupt_on_ack(n: usize) -> Self {
        assert!(n >= 1, "acks are counted from 1");
        let mut acks: VecDeque<Ack> = std::iter::repeat(Ack::Continue).take(n - 1).collect();
        acks.push_back(Ack::Interrupt);
        Self {
            acks,
            ..Self::default()
        }
    }

    pub fn rendered(&self) -> &[LayoutState] {
        &self.rendered
    }

    pub fn last_rendered(&self) -> Option<&LayoutState> {
        self.rendered.last()
    }

    pub fn acks_requested(&self) -> usize {
        self.acks_requested
    }
}

impl Display for FakeDisplay {
    fn render(&mut self, layout: &LayoutState) -> Result<()> {
        self.rendered.push(layout.clone());
        Ok(())
    }

    fn await_ack(&mut self) -> Pin<Box<dyn Future<Output = Result<Ack>> + '_>> {
        self.acks_requested += 1;
        let ack = self.acks.pop_front().unwrap_or(Ack::Continue);
        Box::pin(async move { Ok(ack) })
    }
}

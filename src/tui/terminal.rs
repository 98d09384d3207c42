// src/tui/terminal.rs

//! Real terminal display on top of ratatui + crossterm.

use std::future::Future;
use std::io::{self, Stdout};
use std::pin::Pin;
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::errors::{DemoError, Result};
use crate::layout::LayoutState;

use super::{Ack, Display, PaneTitles, ui};

/// Full-screen live display.
///
/// Entering puts the terminal into raw mode on the alternate screen; dropping
/// the display restores it. While waiting for the user, the last rendered
/// layout is repainted every `refresh` and on resize.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    titles: PaneTitles,
    refresh: Duration,
    last: Option<LayoutState>,
}

impl TerminalDisplay {
    pub fn enter(titles: PaneTitles, refresh: Duration) -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| DemoError::Terminal(format!("failed to enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(DemoError::Terminal(format!(
                "failed to enter alternate screen: {e}"
            )));
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(DemoError::Terminal(format!("failed to create terminal: {e}")));
            }
        };

        debug!(refresh_ms = refresh.as_millis() as u64, "terminal display started");
        Ok(Self {
            terminal,
            events: EventStream::new(),
            titles,
            refresh,
            last: None,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(layout) = self.last.as_ref() else {
            return Ok(());
        };
        let titles = &self.titles;
        self.terminal
            .draw(|f| ui::draw(f, layout, titles))
            .map_err(|e| DemoError::Terminal(format!("failed to draw: {e}")))?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, layout: &LayoutState) -> Result<()> {
        self.last = Some(layout.clone());
        self.redraw()
    }

    fn await_ack(&mut self) -> Pin<Box<dyn Future<Output = Result<Ack>> + '_>> {
        Box::pin(async move {
            let mut ticker = tokio::time::interval(self.refresh);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the layout was just drawn.
            ticker.tick().await;

            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            loop {
                tokio::select! {
                    _ = ticker.tick() => self.redraw()?,
                    res = &mut ctrl_c => {
                        if let Err(e) = res {
                            warn!(error = %e, "failed to listen for Ctrl+C");
                        }
                        return Ok(Ack::Interrupt);
                    }
                    event = self.events.next() => match event {
                        Some(Ok(Event::Key(key))) => {
                            if let Some(ack) = ack_for_key(&key) {
                                debug!(?ack, "user acknowledged");
                                return Ok(ack);
                            }
                        }
                        Some(Ok(Event::Resize(_, _))) => self.redraw()?,
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            return Err(DemoError::Terminal(format!(
                                "failed to read terminal event: {e}"
                            )));
                        }
                        None => {
                            debug!("terminal event stream ended; treating as interrupt");
                            return Ok(Ack::Interrupt);
                        }
                    },
                }
            }
        })
    }
}

/// Map a key press to an acknowledgment: Enter continues, Ctrl-C interrupts,
/// everything else is ignored.
pub fn ack_for_key(key: &KeyEvent) -> Option<Ack> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Ack::Interrupt),
        KeyCode::Enter => Some(Ack::Continue),
        _ => None,
    }
}

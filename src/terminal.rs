//! RAII terminal session.
//!
//! [`TerminalSession::start`] enables raw mode, enters the alternate screen and
//! turns on mouse capture. Dropping the session restores the terminal, and a
//! panic hook restores it before the panic message is printed so the message
//! lands on a normal screen.

use std::io::{self, IsTerminal, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

/// Set while raw mode is active, checked by the panic hook
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Owns the ratatui terminal for the lifetime of the UI
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Take over the terminal.
    ///
    /// Fails when stdin is not an interactive terminal.
    pub fn start() -> Result<Self> {
        if !io::stdin().is_terminal() {
            anyhow::bail!("chronokeys must be run in an interactive terminal");
        }

        enable_raw_mode().context("Failed to enable raw mode - are you in a terminal?")?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        install_panic_hook();

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore_terminal();
            return Err(e).context("Failed to setup terminal");
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to create terminal");
            }
        };
        debug!("terminal session started");

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
        debug!("terminal session ended");
    }
}

/// Chain a hook that restores the terminal before the previous hook runs
fn install_panic_hook() {
    let prev = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        prev(info);
    }));
}

/// Leave raw mode and the alternate screen, at most once
fn restore_terminal() {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}
